use nqueens_trace::board::attacked_squares;
use nqueens_trace::export;
use nqueens_trace::settings::{Preset, PRESETS};
use nqueens_trace::{BoardSize, Frame, Playback, SearchMode, Settings, StepKind};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 750.0]),
        ..Default::default()
    };
    eframe::run_native(
        "N-Queens Backtracking",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(QueensApp::new(cc)))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    // Redirect `log` messages to the browser console.
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .expect("Could not find document");
        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Could not find canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("Element is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    cc.egui_ctx.set_visuals(egui::Visuals::dark());
                    // Recommended for web: avoid infinite resize loops
                    cc.egui_ctx.set_pixels_per_point(1.0);
                    Ok(Box::new(QueensApp::new(cc)))
                }),
            )
            .await
            .expect("failed to start eframe");
    });
}

#[derive(Clone, PartialEq)]
struct Theme {
    name: &'static str,
    background: egui::Color32,
    panel_background: egui::Color32,
    text_color: egui::Color32,
    accent_color: egui::Color32,
    board_light: egui::Color32,
    board_dark: egui::Color32,
    queen_color: egui::Color32,
}

impl Theme {
    fn presets() -> Vec<Self> {
        vec![
            Self {
                name: "Sleek Dark",
                background: egui::Color32::from_rgb(15, 23, 42),
                panel_background: egui::Color32::from_rgb(30, 41, 59),
                text_color: egui::Color32::from_rgb(226, 232, 240),
                accent_color: egui::Color32::from_rgb(99, 102, 241),
                board_light: egui::Color32::from_rgb(241, 245, 249),
                board_dark: egui::Color32::from_rgb(100, 116, 139),
                queen_color: egui::Color32::from_rgb(15, 23, 42),
            },
            Self {
                name: "Classic Wood",
                background: egui::Color32::from_rgb(45, 25, 10),
                panel_background: egui::Color32::from_rgb(70, 40, 20),
                text_color: egui::Color32::from_rgb(245, 230, 200),
                accent_color: egui::Color32::from_rgb(180, 100, 40),
                board_light: egui::Color32::from_rgb(210, 180, 140),
                board_dark: egui::Color32::from_rgb(139, 69, 19),
                queen_color: egui::Color32::from_rgb(45, 25, 10),
            },
            Self {
                name: "Paper",
                background: egui::Color32::from_rgb(240, 240, 230),
                panel_background: egui::Color32::from_rgb(220, 220, 210),
                text_color: egui::Color32::from_rgb(50, 50, 50),
                accent_color: egui::Color32::from_rgb(200, 50, 50),
                board_light: egui::Color32::from_rgb(255, 255, 250),
                board_dark: egui::Color32::from_rgb(200, 200, 190),
                queen_color: egui::Color32::from_rgb(20, 20, 20),
            },
        ]
    }

    fn named(name: &str) -> Self {
        Self::presets()
            .into_iter()
            .find(|t| t.name == name)
            .unwrap_or_default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::presets()[0].clone()
    }
}

struct Particle {
    pos: egui::Pos2,
    vel: egui::Vec2,
    color: egui::Color32,
    life: f32, // 1.0 down to 0.0
    size: f32,
}

struct QueensApp {
    n_input: String,
    settings: Settings,
    playback: Playback,

    paused: bool,
    run_to_end: bool, // keep going past solutions

    last_update: Instant,
    theme: Theme,
    particles: Vec<Particle>,
    status: Option<String>,
}

impl QueensApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            .unwrap_or_default()
            .sanitized();
        log::debug!("starting with {:?}", settings);
        Self {
            n_input: settings.board_size.to_string(),
            playback: settings.playback(),
            theme: Theme::named(&settings.theme),
            settings,
            paused: true,
            run_to_end: false,
            last_update: Instant::now(),
            particles: Vec::new(),
            status: None,
        }
    }

    fn n(&self) -> usize {
        self.settings.board_size
    }

    fn reset(&mut self) {
        self.playback = self.settings.playback();
        self.paused = true;
        self.run_to_end = false;
        self.status = None;
    }

    fn step_once(&mut self, ctx: &egui::Context) -> Option<StepKind> {
        let kind = self.playback.step();
        if kind == Some(StepKind::Solution) {
            let center = ctx.screen_rect().center();
            self.spawn_particles(center, self.theme.accent_color);
        }
        kind
    }

    fn spawn_particles(&mut self, pos: egui::Pos2, color: egui::Color32) {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..30 {
            let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.gen_range(100.0..500.0);
            self.particles.push(Particle {
                pos,
                vel: egui::vec2(angle.cos() * speed, angle.sin() * speed - 200.0),
                color,
                life: 1.0,
                size: rng.gen_range(3.0..7.0),
            });
        }
    }

    fn advance(&mut self, ctx: &egui::Context) {
        if self.paused || self.playback.is_finished() {
            return;
        }
        if self.settings.speed == Settings::MAX_SPEED {
            let start = Instant::now();
            while start.elapsed() < Duration::from_millis(16) {
                match self.step_once(ctx) {
                    Some(StepKind::Solution) if !self.run_to_end => {
                        self.paused = true;
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        } else if self.last_update.elapsed().as_millis() as u64 >= self.settings.step_delay_ms() {
            if self.step_once(ctx) == Some(StepKind::Solution) && !self.run_to_end {
                self.paused = true;
            }
            self.last_update = Instant::now();
        }
        if self.playback.is_finished() {
            self.paused = true;
            log::info!(
                "{}-queens finished: {} solutions in {} steps",
                self.n(),
                self.playback.solutions().len(),
                self.playback.steps_taken()
            );
        }
        ctx.request_repaint();
    }

    fn apply_preset(&mut self, preset: &Preset, ctx: &egui::Context) {
        self.settings.apply(preset);
        self.n_input = self.n().to_string();
        self.reset();
        if preset.export_steps {
            while self.step_once(ctx).is_some() {}
            self.export_steps();
        } else {
            self.paused = false;
        }
    }

    fn board_size_input(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Board Size (1-{}):", Settings::MAX_BOARD_SIZE));
            let resp = ui.add(egui::TextEdit::singleline(&mut self.n_input).desired_width(50.0));
            if resp.changed() {
                match BoardSize::parse_bounded(&self.n_input, Settings::MAX_BOARD_SIZE) {
                    Ok(size) if size.get() != self.n() => {
                        self.settings.board_size = size.get();
                        self.reset();
                    }
                    Ok(_) => self.status = None,
                    Err(err) => self.status = Some(format!("Board size: {}", err)),
                }
            }
            let should_update = resp.lost_focus()
                || (resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            if should_update {
                self.n_input = self.n().to_string();
            }
        });
    }

    fn mode_picker(&mut self, ui: &mut egui::Ui) {
        let before = (self.settings.mode, self.settings.max_solutions);
        ui.horizontal(|ui| {
            ui.label("Mode:");
            egui::ComboBox::from_id_salt("mode_picker")
                .selected_text(self.settings.mode.label())
                .show_ui(ui, |ui| {
                    for mode in [SearchMode::FirstSolution, SearchMode::UpTo, SearchMode::All] {
                        ui.selectable_value(&mut self.settings.mode, mode, mode.label());
                    }
                });
        });
        if self.settings.mode == SearchMode::UpTo {
            ui.horizontal(|ui| {
                ui.label("Max solutions:");
                ui.add(
                    egui::DragValue::new(&mut self.settings.max_solutions)
                        .range(1..=Settings::MAX_SOLUTIONS),
                );
            });
        }
        if before != (self.settings.mode, self.settings.max_solutions) {
            self.reset();
        }
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, btn_size: egui::Vec2) {
        if ui
            .add_sized(btn_size, egui::Button::new("▶"))
            .on_hover_text("Play")
            .clicked()
        {
            if self.playback.is_finished() {
                self.reset();
            }
            self.paused = false;
            self.run_to_end = false;
        }
        if ui
            .add_sized(btn_size, egui::Button::new("|▶"))
            .on_hover_text("Single step")
            .clicked()
        {
            self.step_once(ctx);
            self.paused = true;
        }
        if ui
            .add_sized(btn_size, egui::Button::new("⏩"))
            .on_hover_text("Next solution")
            .clicked()
        {
            if self.playback.run_until_solution() {
                let center = ctx.screen_rect().center();
                self.spawn_particles(center, self.theme.accent_color);
            }
            self.paused = true;
        }
        if ui
            .add_sized(btn_size, egui::Button::new("⏭"))
            .on_hover_text("Run to the end")
            .clicked()
        {
            self.run_to_end = true;
            self.settings.speed = Settings::MAX_SPEED;
            self.paused = false;
        }
        if ui
            .add_sized(btn_size, egui::Button::new("◼"))
            .on_hover_text("Stop / reset")
            .clicked()
        {
            if !self.paused && !self.playback.is_finished() {
                self.paused = true;
            } else {
                self.reset();
            }
        }
    }

    fn export_buttons(&mut self, ui: &mut egui::Ui) {
        if ui.button("Export solutions (CSV)").clicked() {
            self.export_solutions();
        }
        if ui.button("Export steps (CSV)").clicked() {
            self.export_steps();
        }
    }

    fn export_solutions(&mut self) {
        let file_name = format!("nqueens_{}_solutions.csv", self.n());
        let solutions = self.playback.solutions();
        #[cfg(target_arch = "wasm32")]
        let result = export::solutions_csv_string(solutions)
            .and_then(|content| web_download(&content, &file_name));
        #[cfg(not(target_arch = "wasm32"))]
        let result = match save_dialog(&file_name) {
            Some(path) => export::save_solutions_csv(path, solutions),
            None => return,
        };
        self.report_export(result, "solutions");
    }

    fn export_steps(&mut self) {
        let file_name = format!("nqueens_{}_steps.csv", self.n());
        let first = self.playback.first_retained_step();
        #[cfg(target_arch = "wasm32")]
        let result = export::trace_csv_string(first, self.playback.history())
            .and_then(|content| web_download(&content, &file_name));
        #[cfg(not(target_arch = "wasm32"))]
        let result = match save_dialog(&file_name) {
            Some(path) => export::save_trace_csv(path, first, self.playback.history()),
            None => return,
        };
        self.report_export(result, "steps");
    }

    fn report_export(&mut self, result: nqueens_trace::Result<()>, what: &str) {
        self.status = match result {
            Ok(()) => Some(format!("Exported {}", what)),
            Err(err) => {
                log::error!("export of {} failed: {}", what, err);
                Some(format!("Export failed: {}", err))
            }
        };
    }

    fn summary(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(frame_title(self.playback.current())).color(self.theme.text_color));
        ui.label(format!(
            "Steps: {}   Solutions: {}",
            self.playback.steps_taken(),
            self.playback.solutions().len()
        ));
        if self.playback.is_finished() {
            let text = if self.playback.solutions().is_empty() {
                format!("No solution exists for {} queens.", self.n())
            } else {
                String::from("Search finished.")
            };
            ui.label(egui::RichText::new(text).strong().color(self.theme.accent_color));
        }
        if let Some(status) = &self.status {
            ui.label(egui::RichText::new(status).italics());
        }
    }

    fn solution_list(&self, ui: &mut egui::Ui, max_height: f32) {
        egui::ScrollArea::vertical()
            .max_height(max_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for (i, sol) in self.playback.solutions().iter().enumerate() {
                    ui.label(
                        egui::RichText::new(format!("#{}: {}", i + 1, export::format_columns(sol)))
                            .monospace()
                            .size(12.0),
                    );
                }
            });
    }

    fn cycle_theme(&mut self) {
        let presets = Theme::presets();
        if let Some(idx) = presets.iter().position(|t| t.name == self.theme.name) {
            self.theme = presets[(idx + 1) % presets.len()].clone();
            self.settings.theme = self.theme.name.to_owned();
        }
    }

    fn draw_board(&self, ui: &mut egui::Ui, ctx: &egui::Context, is_mobile: bool) {
        let n = self.n();
        let frame = self.playback.current();
        let available_rect = ui.available_rect_before_wrap();
        let margin = if is_mobile { 10.0 } else { 60.0 };
        let size = (available_rect.height() - margin)
            .min(available_rect.width() - margin)
            .max(0.0);
        let board_rect = egui::Rect::from_center_size(available_rect.center(), egui::vec2(size, size));

        ui.painter().rect_filled(
            board_rect.expand(5.0),
            5.0,
            self.theme.text_color.linear_multiply(0.2),
        );

        let cell_size = size / n as f32;
        let painter = ui.painter();
        let attacked = self
            .settings
            .show_threats
            .then(|| attacked_squares(&frame.state, n));
        let trying_cell = frame.candidate.map(|col| (frame.state.len(), col));

        for row in 0..n {
            for col in 0..n {
                let cell_rect = egui::Rect::from_min_size(
                    egui::pos2(
                        board_rect.min.x + col as f32 * cell_size,
                        board_rect.min.y + row as f32 * cell_size,
                    ),
                    egui::vec2(cell_size, cell_size),
                );
                let color = if (row + col) % 2 == 0 {
                    self.theme.board_light
                } else {
                    self.theme.board_dark
                };
                painter.rect_filled(cell_rect, 0.0, color);

                if attacked.as_ref().is_some_and(|a| a[row][col]) {
                    painter.rect_filled(
                        cell_rect.shrink(2.0),
                        2.0,
                        egui::Color32::from_rgba_unmultiplied(255, 0, 0, 40),
                    );
                }

                let font = egui::FontId::proportional(cell_size * 0.7);
                if frame.state.get(row) == Some(&col) {
                    let queen = if frame.kind == StepKind::Solution {
                        self.theme.accent_color
                    } else {
                        self.theme.queen_color
                    };
                    painter.text(cell_rect.center(), egui::Align2::CENTER_CENTER, "♛", font, queen);
                } else if trying_cell == Some((row, col)) {
                    painter.rect_filled(
                        cell_rect.shrink(2.0),
                        2.0,
                        egui::Color32::from_rgba_unmultiplied(0, 200, 0, 60),
                    );
                    let alpha = ctx.animate_bool(egui::Id::new(("trying", row, col)), true);
                    painter.text(
                        cell_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "♛",
                        font,
                        egui::Color32::from_rgb(0, 150, 0).linear_multiply(alpha),
                    );
                }
            }
        }

        for p in &self.particles {
            painter.circle_filled(p.pos, p.size, p.color.linear_multiply(p.life));
        }

        // Row and column indices, matching the placement vectors.
        let font_id = egui::FontId::proportional((cell_size * 0.15).max(8.0));
        for i in 0..n {
            let x = board_rect.min.x + i as f32 * cell_size + cell_size / 2.0;
            painter.text(
                egui::pos2(x, board_rect.max.y + 10.0),
                egui::Align2::CENTER_TOP,
                i.to_string(),
                font_id.clone(),
                self.theme.text_color,
            );
            let y = board_rect.min.y + i as f32 * cell_size + cell_size / 2.0;
            painter.text(
                egui::pos2(board_rect.min.x - 10.0, y),
                egui::Align2::RIGHT_CENTER,
                i.to_string(),
                font_id.clone(),
                self.theme.text_color,
            );
        }
    }
}

fn frame_title(frame: &Frame) -> String {
    match frame.kind {
        StepKind::Initial => String::from("Empty board"),
        StepKind::Trying => format!(
            "Trying row {}, column {}",
            frame.state.len(),
            frame.candidate.unwrap_or_default()
        ),
        StepKind::Backtrack => format!("Backtracked to {}", export::format_columns(&frame.state)),
        StepKind::Solution => format!("Solution found: {}", export::format_columns(&frame.state)),
    }
}

impl eframe::App for QueensApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- Animation Update ---
        let dt = ctx.input(|i| i.stable_dt);
        self.particles.retain_mut(|p| {
            p.pos += p.vel * dt;
            p.vel.y += 800.0 * dt; // Gravity
            p.life -= dt * 1.5;
            p.life > 0.0
        });
        if !self.particles.is_empty() {
            ctx.request_repaint();
        }

        self.advance(ctx);

        let panel_frame = egui::Frame::none()
            .fill(self.theme.panel_background)
            .inner_margin(12.0)
            .rounding(10.0)
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(20)));

        // --- Responsive Layout Detection ---
        let is_mobile = ctx.screen_rect().width() < 700.0;

        if is_mobile {
            egui::TopBottomPanel::top("mobile_top")
                .frame(panel_frame.inner_margin(egui::Margin::symmetric(10.0, 5.0)))
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("♛ N-Queens")
                                .strong()
                                .color(self.theme.accent_color),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Sols: {}",
                                    self.playback.solutions().len()
                                ))
                                .strong(),
                            );
                        });
                    });
                });

            egui::TopBottomPanel::bottom("mobile_bottom")
                .frame(panel_frame.inner_margin(egui::Margin::symmetric(15.0, 10.0)))
                .show(ctx, |ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label("Size:");
                            if ui.button("-").clicked() && self.n() > 1 {
                                self.settings.board_size -= 1;
                                self.n_input = self.n().to_string();
                                self.reset();
                            }
                            ui.label(
                                egui::RichText::new(self.n().to_string())
                                    .strong()
                                    .color(self.theme.accent_color),
                            );
                            if ui.button("+").clicked() && self.n() < Settings::MAX_BOARD_SIZE {
                                self.settings.board_size += 1;
                                self.n_input = self.n().to_string();
                                self.reset();
                            }

                            ui.add_space(20.0);
                            ui.label("Speed:");
                            ui.add(
                                egui::Slider::new(&mut self.settings.speed, 1..=Settings::MAX_SPEED)
                                    .show_value(true),
                            );
                        });

                        ui.add_space(8.0);
                        self.mode_picker(ui);

                        ui.horizontal(|ui| {
                            ui.checkbox(&mut self.settings.show_threats, "Threats");
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("🎨 Theme").clicked() {
                                        self.cycle_theme();
                                    }
                                    if ui.button("Export").clicked() {
                                        self.export_solutions();
                                    }
                                },
                            );
                        });

                        ui.add_space(8.0);
                        ui.horizontal_centered(|ui| {
                            let b_size = egui::vec2(ui.available_width() / 5.0 - 5.0, 45.0);
                            self.playback_controls(ui, ctx, b_size);
                        });
                        self.summary(ui);
                    });
                });
        } else {
            egui::SidePanel::right("controls")
                .frame(panel_frame)
                .min_width(320.0)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(8.0);
                            ui.label(
                                egui::RichText::new("♛ N-Queens")
                                    .size(24.0)
                                    .strong()
                                    .color(self.theme.text_color),
                            );
                        });
                        ui.add_space(20.0);
                        ui.label(
                            egui::RichText::new("Configuration")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        self.board_size_input(ui);
                        self.mode_picker(ui);

                        ui.add_space(15.0);
                        ui.label(
                            egui::RichText::new("Controls")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        ui.horizontal_wrapped(|ui| {
                            self.playback_controls(ui, ctx, egui::vec2(50.0, 40.0));
                        });

                        ui.add_space(10.0);
                        ui.add(
                            egui::Slider::new(&mut self.settings.speed, 1..=Settings::MAX_SPEED)
                                .text("Speed"),
                        );
                        ui.checkbox(&mut self.settings.show_threats, "Show Threatened Squares");

                        ui.add_space(10.0);
                        ui.label("Theme:");
                        let mut theme_changed = false;
                        egui::ComboBox::from_id_salt("theme_picker")
                            .selected_text(self.theme.name)
                            .show_ui(ui, |ui| {
                                for preset in Theme::presets() {
                                    theme_changed |= ui
                                        .selectable_value(&mut self.theme, preset.clone(), preset.name)
                                        .changed();
                                }
                            });
                        if theme_changed {
                            self.settings.theme = self.theme.name.to_owned();
                        }

                        ui.add_space(15.0);
                        ui.label(
                            egui::RichText::new("Presets")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        ui.horizontal_wrapped(|ui| {
                            for preset in PRESETS {
                                if ui.button(preset.label).clicked() {
                                    self.apply_preset(preset, ctx);
                                }
                            }
                        });

                        ui.add_space(20.0);
                        self.summary(ui);

                        ui.add_space(10.0);
                        self.export_buttons(ui);

                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new("Solutions History")
                                .strong()
                                .color(self.theme.text_color),
                        );
                        ui.separator();
                        self.solution_list(ui, 200.0);
                    });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(ctx, |ui| {
                self.draw_board(ui, ctx, is_mobile);
            });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_dialog(file_name: &str) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(file_name)
        .save_file()
}

#[cfg(target_arch = "wasm32")]
fn web_download(content: &str, file_name: &str) -> nqueens_trace::Result<()> {
    use wasm_bindgen::JsValue;

    let download = || -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let blob = web_sys::Blob::new_with_str_sequence_and_options(
            &parts,
            web_sys::BlobPropertyBag::new().type_("text/csv"),
        )?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        let a = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| JsValue::from_str("not an anchor element"))?;
        a.set_href(&url);
        a.set_download(file_name);
        a.click();
        web_sys::Url::revoke_object_url(&url)
    };
    download().map_err(|err| {
        nqueens_trace::Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("{:?}", err),
        ))
    })
}
