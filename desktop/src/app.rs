use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use eframe::egui::{self, Color32, RichText};
use image::ImageReader;

use crate::net;
use freshscan_common::layout::{format_percent, format_size};
use freshscan_common::{
    AnalyzerState, ReportView, SavedReport, SelectedFile, Tier, DEFAULT_ENDPOINT,
};

pub struct DesktopApp {
    state: AnalyzerState,
    selected_path: Option<PathBuf>,
    pending_file: Option<AnalyzedFile>,
    analyzed_file: Option<AnalyzedFile>,
    analyzed_at: Option<String>,
    endpoint: String,
    field: UploadField,
    status: String,
    notice: Option<String>,
    analyze_rx: Option<Receiver<UiMessage>>,
    preview: Option<egui::TextureHandle>,
    preview_rx: Receiver<PreviewData>,
    preview_tx: mpsc::Sender<PreviewData>,
    preview_pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadField {
    Image,
    File,
}

impl UploadField {
    fn as_str(&self) -> &'static str {
        match self {
            UploadField::Image => "image",
            UploadField::File => "file",
        }
    }
}

impl Default for UploadField {
    fn default() -> Self {
        UploadField::Image
    }
}

#[derive(Clone)]
struct AnalyzedFile {
    name: String,
    path: String,
}

enum UiMessage {
    AnalyzeDone {
        result: Result<freshscan_common::FreshnessReport, String>,
    },
}

struct PreviewData {
    size: [usize; 2],
    pixels: Vec<u8>,
}

impl DesktopApp {
    fn pick_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file()
        {
            let name = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("image")
                .to_string();
            let size = std::fs::metadata(&path).ok().map(|m| m.len());

            self.state.select_file(SelectedFile {
                name,
                mime: mime_for(&path).to_string(),
                size,
            });
            self.selected_path = Some(path.clone());
            self.preview = None;
            self.request_preview(path);
            self.status.clear();
        }
    }

    fn request_preview(&mut self, path: PathBuf) {
        self.preview_pending = true;
        let sender = self.preview_tx.clone();

        std::thread::spawn(move || {
            let image = ImageReader::open(&path).ok().and_then(|r| r.decode().ok());
            let data = match image {
                Some(image) => {
                    let thumb = image.thumbnail(320, 240);
                    PreviewData {
                        size: [thumb.width() as usize, thumb.height() as usize],
                        pixels: thumb.to_rgba8().into_raw(),
                    }
                }
                None => PreviewData {
                    size: [0, 0],
                    pixels: Vec::new(),
                },
            };
            let _ = sender.send(data);
        });
    }

    fn run_analyze(&mut self) {
        if let Err(err) = self.state.begin() {
            self.notice = Some(err.to_string());
            return;
        }
        self.notice = None;

        let Some(path) = self.selected_path.clone() else {
            self.state.fail();
            return;
        };
        self.pending_file = Some(AnalyzedFile {
            name: self
                .state
                .selected
                .as_ref()
                .map(|f| f.name.clone())
                .unwrap_or_default(),
            path: path.display().to_string(),
        });

        let endpoint = self.endpoint.clone();
        let field = self.field.as_str().to_string();
        let (tx, rx) = mpsc::channel();
        self.analyze_rx = Some(rx);
        self.status = "Analyzing...".to_string();

        std::thread::spawn(move || {
            let result = net::analyze_blocking(&endpoint, &field, &path).map_err(|e| format!("{e:#}"));
            let _ = tx.send(UiMessage::AnalyzeDone { result });
        });
    }

    fn save_report(&mut self) {
        let Some(report) = self.state.report.clone() else {
            self.status = "No report to save".to_string();
            return;
        };
        let analyzed = self.analyzed_file.clone().unwrap_or(AnalyzedFile {
            name: String::new(),
            path: String::new(),
        });

        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(net::default_report_name(&analyzed.name))
            .save_file()
        {
            let saved = SavedReport {
                file_name: analyzed.name,
                file_path: analyzed.path,
                captured_at: String::new(),
                analyzed_at: self.analyzed_at.clone().unwrap_or_default(),
                report,
            };
            match net::save_report(&path, &saved) {
                Ok(_) => self.status = format!("Saved {}", path.display()),
                Err(err) => self.status = format!("Save failed: {err}"),
            }
        }
    }

    fn poll_messages(&mut self) {
        if let Some(rx) = &self.analyze_rx {
            if let Ok(UiMessage::AnalyzeDone { result }) = rx.try_recv() {
                self.analyze_rx = None;
                match result {
                    Ok(report) => {
                        self.state.complete(report);
                        self.analyzed_file = self.pending_file.take();
                        self.analyzed_at = Some(chrono::Utc::now().to_rfc3339());
                        self.status = "Analysis complete".to_string();
                    }
                    Err(err) => {
                        log::error!("analysis failed: {err}");
                        self.state.fail();
                        self.pending_file = None;
                        self.notice = Some("Error analyzing image".to_string());
                        self.status.clear();
                    }
                }
            }
        }
    }

    fn process_preview(&mut self, ctx: &egui::Context) {
        while let Ok(data) = self.preview_rx.try_recv() {
            self.preview_pending = false;
            if data.size[0] == 0 || data.size[1] == 0 {
                self.preview = None;
                continue;
            }
            let color_image = egui::ColorImage::from_rgba_unmultiplied(data.size, &data.pixels);
            self.preview =
                Some(ctx.load_texture("preview", color_image, egui::TextureOptions::default()));
        }
    }

    fn render_central(&mut self, ui: &mut egui::Ui) {
        let mut dismiss = false;
        if let Some(notice) = &self.notice {
            egui::Frame::none()
                .fill(Color32::from_rgb(64, 32, 32))
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(notice).color(Color32::from_rgb(240, 160, 160)));
                        if ui.button("OK").clicked() {
                            dismiss = true;
                        }
                    });
                });
            ui.add_space(8.0);
        }
        if dismiss {
            self.notice = None;
        }

        if let Some(file) = &self.state.selected {
            let size = file.size.map(format_size).unwrap_or_default();
            ui.label(if size.is_empty() {
                file.name.clone()
            } else {
                format!("{} ({})", file.name, size)
            });
        } else {
            ui.label(RichText::new("No image selected").color(Color32::from_gray(140)));
        }

        if let Some(texture) = &self.preview {
            ui.add(egui::Image::new(texture).fit_to_exact_size(egui::vec2(320.0, 240.0)));
        } else if self.preview_pending {
            ui.label("Loading preview...");
        }

        if let Some(report) = &self.state.report {
            let view = ReportView::from_report(report);
            ui.separator();
            ui.heading(RichText::new(&view.headline).color(tier_color(view.tier)));

            egui::Grid::new("report_grid")
                .striped(true)
                .min_col_width(110.0)
                .show(ui, |ui| {
                    for row in &view.rows {
                        ui.label(RichText::new(row.label).color(Color32::from_gray(200)));
                        ui.label(&row.value);
                        ui.end_row();
                    }
                });

            for bar in &view.bars {
                let fraction = (bar.width / 100.0) as f32;
                ui.add(
                    egui::ProgressBar::new(fraction)
                        .fill(tier_color(bar.tier))
                        .text(format!("{}  {}%", bar.label, format_percent(bar.percent))),
                );
            }
        }
    }
}

impl Default for DesktopApp {
    fn default() -> Self {
        let (preview_tx, preview_rx) = mpsc::channel();
        Self {
            state: AnalyzerState::default(),
            selected_path: None,
            pending_file: None,
            analyzed_file: None,
            analyzed_at: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field: UploadField::default(),
            status: String::new(),
            notice: None,
            analyze_rx: None,
            preview: None,
            preview_rx,
            preview_tx,
            preview_pending: false,
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.analyze_rx.is_some() || self.preview_pending {
            ctx.request_repaint();
        }
        self.poll_messages();
        self.process_preview(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // the picker stays enabled even while a request is running
                if ui.button("Choose Image...").clicked() {
                    self.pick_image();
                }
                if ui
                    .add_enabled(
                        self.state.can_trigger(),
                        egui::Button::new(self.state.trigger_label()),
                    )
                    .clicked()
                {
                    self.run_analyze();
                }
                let save_enabled = self.state.report.is_some();
                if ui
                    .add_enabled(save_enabled, egui::Button::new("Save Report JSON"))
                    .clicked()
                {
                    self.save_report();
                }
                ui.separator();
                if !self.status.is_empty() {
                    ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
                }
            });
            ui.horizontal(|ui| {
                ui.label("Endpoint");
                ui.add(egui::TextEdit::singleline(&mut self.endpoint).desired_width(360.0));
                ui.label("Field");
                ui.radio_value(&mut self.field, UploadField::Image, "image");
                ui.radio_value(&mut self.field, UploadField::File, "file");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_central(ui);
            });
        });
    }
}

fn tier_color(tier: Tier) -> Color32 {
    let (r, g, b) = tier.rgb();
    Color32::from_rgb(r, g, b)
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
