#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rent_buy_calculator::{
    chart::{BarKind, ChartData},
    config,
    format::{format_currency, format_percent},
    housing::{self, amortization_schedule, yearly_summary, ProjectionInput, ProjectionResult},
    i18n::{self, keys},
    logging, report,
};
use std::{env, fs, path::Path};
use tracing::{info, warn};

const RENT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x25, 0x63, 0xeb);
const BUY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x10, 0xb9, 0x81);
/// 100% 막대의 높이 [pt]
const CHART_MAX_BAR_HEIGHT: f32 = 200.0;
const CHART_BAR_WIDTH: f32 = 60.0;

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let mut verbose = false;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        } else if a == "--verbose" || a == "-v" {
            verbose = true;
        }
        i += 1;
    }
    logging::init(verbose);

    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config load failed, using defaults");
            config::Config::default()
        }
    };
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Rent vs Buy Calculator",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 기본 폰트 뒤에 대체 폰트로 등록한다.
/// 1) assets/fonts/ 2) 시스템 폰트 순으로 찾고, 없으면 Err.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        Path::new("assets/fonts/malgun.ttf").to_path_buf(),
        Path::new("assets/fonts/NotoSansKR-Regular.ttf").to_path_buf(),
        Path::new("/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc").to_path_buf(),
        Path::new("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc").to_path_buf(),
        Path::new("/System/Library/Fonts/AppleSDGothicNeo.ttc").to_path_buf(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "hangul_font");
            info!(font = %p.display(), "font loaded");
            return Ok(());
        }
    }
    Err("Hangul font not found. Set a font file in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 차트 영역 안에서 두 막대의 사각형을 계산한다. 막대 아래쪽은 영역 바닥에 맞춘다.
fn bar_rects(area: egui::Rect, chart: &ChartData) -> [(BarKind, egui::Rect); 2] {
    let gap = (area.width() - 2.0 * CHART_BAR_WIDTH) / 3.0;
    let bars = chart.bars();
    let mut out = [(BarKind::Rent, egui::Rect::NOTHING); 2];
    for (idx, bar) in bars.iter().enumerate() {
        let left = area.left() + gap + idx as f32 * (CHART_BAR_WIDTH + gap);
        let height = area.height() * bar.proportion as f32;
        let rect = egui::Rect::from_min_max(
            egui::pos2(left, area.bottom() - height),
            egui::pos2(left + CHART_BAR_WIDTH, area.bottom()),
        );
        out[idx] = (bar.kind, rect);
    }
    out
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    currency_input: String,
    save_status: Option<String>,
    window_alpha: f32,
    apply_initial_view_size: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    show_schedule: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    // 입력 폼
    form: ProjectionInput,
    // 마지막 계산
    last_input: Option<ProjectionInput>,
    result: Option<ProjectionResult>,
    error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        info!(lang = %lang_code, "GUI language resolved");
        Self {
            tr,
            lang_input: config.language.clone(),
            currency_input: config.currency_symbol.clone(),
            save_status: None,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            apply_initial_view_size: true,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            show_schedule: false,
            custom_font_path: String::new(),
            font_load_error: None,
            form: config.defaults.clone(),
            last_input: None,
            result: None,
            error: None,
            config,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 현재 폼 값으로 계산한다. 실패하면 이전 결과를 지우고 오류 메시지를 남긴다.
    fn calculate(&mut self) {
        match housing::compute_projection(&self.form) {
            Ok(result) => {
                self.result = Some(result);
                self.last_input = Some(self.form.clone());
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "projection rejected");
                self.result = None;
                self.last_input = None;
                self.error = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn money(&self, v: f64) -> String {
        format_currency(v, &self.config.currency_symbol)
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.form.heading", "Your numbers"));
        ui.add_space(6.0);
        let labels = [
            self.txt("gui.form.monthly_rent", "Monthly rent"),
            self.txt("gui.form.home_price", "Home price"),
            self.txt("gui.form.down_payment", "Down payment (%)"),
            self.txt("gui.form.mortgage_rate", "Mortgage rate (%/yr)"),
            self.txt("gui.form.amortization", "Amortization (years)"),
            self.txt("gui.form.property_tax", "Property tax (%/yr)"),
            self.txt("gui.form.appreciation", "Home appreciation (%/yr)"),
            self.txt("gui.form.years", "Years to compare"),
        ];
        let symbol = self.config.currency_symbol.clone();
        let f = &mut self.form;
        egui::Grid::new("projection_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(labels[0].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.monthly_rent)
                        .speed(10.0)
                        .clamp_range(0.0..=f64::MAX)
                        .prefix(symbol.as_str()),
                );
                ui.end_row();
                ui.label(labels[1].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.home_price)
                        .speed(1000.0)
                        .clamp_range(0.0..=f64::MAX)
                        .prefix(symbol.as_str()),
                );
                ui.end_row();
                ui.label(labels[2].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.down_payment_pct)
                        .speed(0.5)
                        .clamp_range(0.0..=100.0)
                        .suffix(" %"),
                );
                ui.end_row();
                ui.label(labels[3].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.mortgage_rate)
                        .speed(0.05)
                        .clamp_range(0.0..=100.0)
                        .suffix(" %"),
                );
                ui.end_row();
                ui.label(labels[4].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.amortization_years)
                        .clamp_range(1..=housing::MAX_YEARS),
                );
                ui.end_row();
                ui.label(labels[5].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.property_tax_rate)
                        .speed(0.05)
                        .clamp_range(0.0..=100.0)
                        .suffix(" %"),
                );
                ui.end_row();
                ui.label(labels[6].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.appreciation_rate)
                        .speed(0.05)
                        .clamp_range(-100.0..=100.0)
                        .suffix(" %"),
                );
                ui.end_row();
                ui.label(labels[7].as_str());
                ui.add(
                    egui::DragValue::new(&mut f.horizon_years).clamp_range(1..=housing::MAX_YEARS),
                );
                ui.end_row();
            });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(self.txt("gui.form.calculate", "Calculate")).clicked() {
                self.calculate();
            }
            if ui.button(self.txt("gui.form.reset", "Reset to saved defaults")).clicked() {
                self.form = self.config.defaults.clone();
            }
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.results.heading", "Results"));
        ui.separator();
        if let Some(err) = &self.error {
            ui.colored_label(ui.visuals().error_fg_color, err.as_str());
            return;
        }
        let (Some(result), Some(input)) = (self.result.clone(), self.last_input.clone()) else {
            ui.label(self.txt("gui.results.empty", "Enter your numbers and press Calculate."));
            return;
        };

        ui.label(
            egui::RichText::new(format!(
                "{} {}",
                self.tr.t(keys::RESULT_TOTAL_RENT),
                self.money(result.total_rent_cost)
            ))
            .size(16.0),
        );
        ui.label(
            egui::RichText::new(format!(
                "{} {}",
                self.tr.t(keys::RESULT_TOTAL_BUY),
                self.money(result.buy.net_cost)
            ))
            .size(16.0),
        );
        ui.label(
            egui::RichText::new(format!(
                "{} {}",
                self.tr.t(keys::RESULT_RECOMMENDATION),
                report::recommendation_text(&self.tr, result.recommendation)
            ))
            .strong()
            .size(18.0),
        );
        for w in &result.warnings {
            ui.colored_label(ui.visuals().warn_fg_color, report::warning_text(&self.tr, w));
        }

        ui.add_space(10.0);
        ui.label(egui::RichText::new(self.txt("gui.chart.heading", "Cost comparison")).strong());
        self.draw_bar_chart(ui, &result.chart());

        ui.add_space(10.0);
        egui::CollapsingHeader::new(self.txt("gui.results.breakdown", "Buy cost breakdown"))
            .default_open(true)
            .show(ui, |ui| self.ui_breakdown(ui, &input, &result));

        let toggle = self.txt("gui.schedule.toggle", "Show yearly amortization");
        ui.checkbox(&mut self.show_schedule, toggle);
        if self.show_schedule {
            self.ui_schedule(ui, &input, &result);
        }
    }

    /// 원래 값 레이블을 막대 위에, 막대 이름을 아래에 그린다.
    fn draw_bar_chart(&self, ui: &mut egui::Ui, chart: &ChartData) {
        let label_band = 22.0;
        let size = egui::vec2(
            (CHART_BAR_WIDTH * 2.0 + 120.0).max(260.0),
            CHART_MAX_BAR_HEIGHT + label_band * 2.0,
        );
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let area = egui::Rect::from_min_max(
            response.rect.min + egui::vec2(0.0, label_band),
            response.rect.max - egui::vec2(0.0, label_band),
        );
        let text_color = ui.visuals().text_color();
        painter.line_segment(
            [area.left_bottom(), area.right_bottom()],
            egui::Stroke::new(1.0, text_color),
        );
        let values = chart.bars();
        for ((kind, rect), bar) in bar_rects(area, chart).into_iter().zip(values) {
            let (color, name) = match kind {
                BarKind::Rent => (RENT_COLOR, self.tr.t(keys::CHART_RENT)),
                BarKind::Buy => (BUY_COLOR, self.tr.t(keys::CHART_BUY)),
            };
            if rect.height() > 0.0 {
                let rounding = egui::Rounding {
                    nw: 6.0,
                    ne: 6.0,
                    sw: 0.0,
                    se: 0.0,
                };
                painter.rect_filled(rect, rounding, color);
            }
            painter.text(
                egui::pos2(rect.center().x, rect.top() - 4.0),
                egui::Align2::CENTER_BOTTOM,
                self.money(bar.value),
                egui::FontId::proportional(13.0),
                text_color,
            );
            painter.text(
                egui::pos2(rect.center().x, area.bottom() + 4.0),
                egui::Align2::CENTER_TOP,
                name,
                egui::FontId::proportional(14.0),
                text_color,
            );
        }
        response.on_hover_text(format!(
            "{} {}% / {} {}%",
            self.tr.t(keys::CHART_RENT),
            chart.rent.percent(),
            self.tr.t(keys::CHART_BUY),
            chart.buy.percent()
        ));
    }

    fn ui_breakdown(&self, ui: &mut egui::Ui, input: &ProjectionInput, result: &ProjectionResult) {
        let buy = &result.buy;
        let rows = [
            (keys::BREAKDOWN_DOWN_PAYMENT, buy.down_payment),
            (keys::BREAKDOWN_MORTGAGE_AMOUNT, buy.mortgage_amount),
            (keys::BREAKDOWN_MONTHLY_PAYMENT, buy.monthly_payment),
            (keys::BREAKDOWN_TOTAL_MORTGAGE, buy.total_mortgage_payments),
            (keys::BREAKDOWN_PROPERTY_TAX, buy.property_tax),
            (keys::BREAKDOWN_FUTURE_VALUE, buy.future_home_value),
            (
                keys::BREAKDOWN_APPRECIATION_GAIN,
                buy.appreciation_gain(input.home_price),
            ),
            (keys::BREAKDOWN_PRINCIPAL_REPAID, buy.principal_repaid),
            (keys::BREAKDOWN_REMAINING_BALANCE, buy.remaining_balance),
        ];
        egui::Grid::new("buy_breakdown")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (key, value) in rows {
                    ui.label(self.tr.t(key));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(self.money(value));
                    });
                    ui.end_row();
                }
            });
        ui.label(
            egui::RichText::new(format!(
                "{} {} · {} {}",
                self.tr.t(keys::PROMPT_MORTGAGE_RATE),
                format_percent(input.mortgage_rate),
                self.tr.t(keys::PROMPT_APPRECIATION),
                format_percent(input.appreciation_rate)
            ))
            .small(),
        );
    }

    fn ui_schedule(&self, ui: &mut egui::Ui, input: &ProjectionInput, result: &ProjectionResult) {
        let rows = amortization_schedule(
            result.buy.mortgage_amount,
            input.mortgage_rate,
            result.buy.monthly_payment,
            input.horizon_months(),
        );
        egui::Grid::new("yearly_schedule")
            .num_columns(4)
            .striped(true)
            .show(ui, |ui| {
                ui.strong(self.txt("gui.schedule.year", "Year"));
                ui.strong(self.txt("gui.schedule.interest", "Interest"));
                ui.strong(self.txt("gui.schedule.principal", "Principal"));
                ui.strong(self.txt("gui.schedule.balance", "Balance"));
                ui.end_row();
                for year in yearly_summary(&rows) {
                    ui.label(year.year.to_string());
                    ui.label(self.money(year.interest));
                    ui.label(self.money(year.principal));
                    ui.label(self.money(year.ending_balance));
                    ui.end_row();
                }
            });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new(self.txt("gui.settings.title", "Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.txt("gui.settings.lang", "Language"));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.clone())
                    .show_ui(ui, |ui| {
                        let auto = self.txt("gui.settings.lang.auto", "System");
                        ui.selectable_value(&mut self.lang_input, "auto".into(), auto);
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                    });
                ui.separator();
                ui.label(self.txt("gui.settings.currency", "Currency symbol"));
                ui.text_edit_singleline(&mut self.currency_input);
                ui.separator();
                ui.label(self.txt("gui.settings.alpha", "Window transparency"));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                ui.separator();
                ui.label(self.txt("gui.settings.font", "Font file (.ttf/.ttc)"));
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.custom_font_path);
                    if ui.button(self.txt("gui.settings.font_load", "Load font")).clicked() {
                        self.font_load_error =
                            load_custom_font(ctx, self.custom_font_path.trim()).err();
                    }
                });
                if let Some(e) = &self.font_load_error {
                    ui.colored_label(ui.visuals().error_fg_color, e.as_str());
                }
                ui.separator();
                if ui
                    .button(self.txt(
                        "gui.settings.save_defaults",
                        "Use current inputs as defaults",
                    ))
                    .clicked()
                {
                    self.config.defaults = self.form.clone();
                }
                if ui.button(self.txt("gui.settings.save", "Save settings")).clicked() {
                    self.apply_settings();
                }
                if let Some(msg) = &self.save_status {
                    ui.label(msg.as_str());
                }
            });
        self.show_settings_modal = open;
    }

    /// 설정 창 입력을 config에 반영하고 저장한다. 번역기는 즉시 다시 만든다.
    fn apply_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        let symbol = self.currency_input.trim();
        if !symbol.is_empty() {
            self.config.currency_symbol = symbol.to_string();
        }
        let resolved = i18n::resolve_language("auto", Some(self.config.language.as_str()));
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.save_status = Some(match self.config.save() {
            Ok(()) => self.txt("gui.settings.saved", "Saved."),
            Err(e) => {
                warn!(error = %e, "config save failed");
                format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target =
                    egui::vec2((screen.x * 0.5).max(860.0), (screen.y * 0.6).max(640.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt("gui.nav.app_title", "Rent vs Buy Calculator"));
                ui.separator();
                if ui.button(self.txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(self.txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_help_modal {
            let mut open = true;
            egui::Window::new(self.txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(self.txt(
                        "gui.about.app",
                        "Compares the cost of renting with the net cost of buying over the same period.",
                    ));
                    ui.label(self.txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(self.txt("gui.about.simplifications", "Simplifications apply."));
                });
            self.show_help_modal = open;
        }

        if self.show_formula_modal {
            let mut open = true;
            egui::Window::new(self.txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.label(self.txt(
                        "gui.formula.payment",
                        "Monthly payment: P·r·(1+r)^n / ((1+r)^n − 1).",
                    ));
                    ui.label(self.txt(
                        "gui.formula.rent",
                        "Total rent = monthly rent × 12 × years.",
                    ));
                    ui.separator();
                    ui.label(self.txt("gui.formula.buy", "Net buy cost = outlay − equity gained."));
                    ui.label(self.txt(
                        "gui.formula.principal",
                        "Principal repaid is accumulated month by month.",
                    ));
                    ui.label(self.txt(
                        "gui.formula.value",
                        "Future value = price × (1 + appreciation)^years.",
                    ));
                });
            self.show_formula_modal = open;
        }

        // 좌측 입력 폼 + 본문 결과
        egui::SidePanel::left("form")
            .resizable(true)
            .min_width(260.0)
            .default_width(320.0)
            .show(ctx, |ui| {
                self.ui_form(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_results(ui));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_with_defaults_produces_result() {
        let mut app = GuiApp::new(config::Config::default());
        app.calculate();
        let result = app.result.as_ref().expect("result");
        assert!(app.error.is_none());
        assert!((result.total_rent_cost - 240_000.0).abs() < 1e-9);
        assert_eq!(app.last_input.as_ref(), Some(&app.form));
    }

    #[test]
    fn invalid_form_clears_previous_result() {
        let mut app = GuiApp::new(config::Config::default());
        app.calculate();
        app.form.home_price = 0.0;
        app.calculate();
        assert!(app.result.is_none());
        assert!(app.error.is_some());
    }

    #[test]
    fn larger_bar_fills_chart_height() {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 200.0));
        let chart = ChartData::from_costs(100.0, 50.0);
        let [(rent_kind, rent), (buy_kind, buy)] = bar_rects(area, &chart);
        assert_eq!(rent_kind, BarKind::Rent);
        assert_eq!(buy_kind, BarKind::Buy);
        assert!((rent.height() - 200.0).abs() < 1e-3);
        assert!((buy.height() - 100.0).abs() < 1e-3);
        assert!((rent.bottom() - area.bottom()).abs() < 1e-3);
        assert!(rent.right() < buy.left());
    }

    #[test]
    fn zero_costs_give_empty_bars() {
        let area = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 200.0));
        let chart = ChartData::from_costs(0.0, 0.0);
        for (_, rect) in bar_rects(area, &chart) {
            assert_eq!(rect.height(), 0.0);
        }
    }
}
