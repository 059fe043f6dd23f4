use eframe::egui;
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tileview::{
    Animate, ConfigError, LayoutContainer, LayoutOptions, ManualClock, Rect, Size, Surface,
    TileInfo,
};

const MAX_TILES: usize = 36;

// --- Demo surface ---

struct DemoTile {
    id: u64,
    big: bool,
    color_index: usize,
}

/// Tiles the user added, plus whatever rect the engine last applied to each.
pub struct Stage {
    size: Size,
    tiles: Vec<DemoTile>,
    rendered: HashMap<u64, Rect>,
    next_id: u64,
}

impl Stage {
    fn new(count: usize, big: Option<usize>) -> Self {
        let mut stage = Stage {
            size: Size::default(),
            tiles: Vec::new(),
            rendered: HashMap::new(),
            next_id: 0,
        };
        for _ in 0..count.min(MAX_TILES) {
            stage.add_tile();
        }
        if let Some(tile) = big.and_then(|i| stage.tiles.get_mut(i)) {
            tile.big = true;
        }
        stage
    }

    fn add_tile(&mut self) {
        if self.tiles.len() >= MAX_TILES {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tiles.push(DemoTile {
            id,
            big: false,
            color_index: id as usize,
        });
    }

    fn remove_tile(&mut self) {
        if let Some(tile) = self.tiles.pop() {
            self.rendered.remove(&tile.id);
        }
    }

    /// Make `id` the only big tile, or clear it if it already was.
    fn toggle_big(&mut self, id: u64) {
        for tile in &mut self.tiles {
            tile.big = tile.id == id && !tile.big;
        }
    }

    fn clear_big(&mut self) {
        for tile in &mut self.tiles {
            tile.big = false;
        }
    }
}

impl Surface for Stage {
    type Id = u64;

    fn size(&self) -> Size {
        self.size
    }

    fn tiles(&self) -> Vec<TileInfo<u64>> {
        self.tiles
            .iter()
            .map(|t| TileInfo {
                big: t.big,
                ..TileInfo::new(t.id)
            })
            .collect()
    }

    fn apply_rect(&mut self, id: &u64, rect: Rect) {
        self.rendered.insert(*id, rect);
    }
}

// --- Main app ---

pub struct TileViewApp {
    container: LayoutContainer<Stage, ManualClock>,
    clock: ManualClock,
    needs_layout: bool,
    animate: bool,
    completed: Rc<Cell<u64>>,
    hovered: Option<u64>,
}

impl TileViewApp {
    pub fn new(
        options: LayoutOptions,
        tiles: usize,
        big: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let animate = !options.animate.duration().is_zero();
        let clock = ManualClock::new();
        let mut container =
            LayoutContainer::with_clock(Stage::new(tiles, big), options, clock.clone())?;

        let completed = Rc::new(Cell::new(0));
        let counter = completed.clone();
        container.on_complete(move |_| counter.set(counter.get() + 1));

        Ok(Self {
            container,
            clock,
            needs_layout: true,
            animate,
            completed,
            hovered: None,
        })
    }

    fn set_animate(&mut self, animate: bool) {
        let options = LayoutOptions {
            animate: Animate::Enabled(animate),
            ..self.container.options().clone()
        };
        match self.container.set_options(options) {
            Ok(()) => self.animate = animate,
            Err(e) => tracing::warn!("Rejected layout options: {}", e),
        }
    }

    fn sync_size(&mut self, area: egui::Rect) {
        let size = Size::new(area.width() as f64, area.height() as f64);
        let stage = self.container.surface_mut();
        let changed = (stage.size.width - size.width).abs() >= 1.0
            || (stage.size.height - size.height).abs() >= 1.0;
        if changed {
            stage.size = size;
            self.needs_layout = true;
        }
    }

    fn tile_at(&self, pos: egui::Pos2, origin: egui::Pos2) -> Option<u64> {
        let stage = self.container.surface();
        stage.tiles.iter().rev().find_map(|t| {
            let r = stage.rendered.get(&t.id)?;
            to_screen(*r, origin).contains(pos).then_some(t.id)
        })
    }
}

impl eframe::App for TileViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.clock.set(Duration::from_secs_f64(now.max(0.0)));

        // ---- Top panel ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("TileView");
                ui.separator();

                if ui.button("Add tile").clicked() {
                    self.container.surface_mut().add_tile();
                    self.needs_layout = true;
                }
                if ui.button("Remove tile").clicked() {
                    self.container.surface_mut().remove_tile();
                    self.needs_layout = true;
                }
                if ui.button("Clear big").clicked() {
                    self.container.surface_mut().clear_big();
                    self.needs_layout = true;
                }

                ui.separator();
                let mut animate = self.animate;
                if ui.checkbox(&mut animate, "Animate").changed() {
                    self.set_animate(animate);
                }
            });
        });

        // ---- Status bar ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let stage = self.container.surface();
                ui.label(format!(
                    "{} tiles | {:.0} x {:.0} | {} transitions completed",
                    stage.tiles.len(),
                    stage.size.width,
                    stage.size.height,
                    self.completed.get()
                ));
                if self.container.is_animating() {
                    ui.separator();
                    ui.label("animating");
                }
            });
        });

        // ---- Central panel: tiles ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.available_rect_before_wrap();
            self.sync_size(area);

            if self.needs_layout {
                self.container.layout();
                self.needs_layout = false;
            }
            if self.container.tick() {
                ctx.request_repaint();
            }

            let stage = self.container.surface();
            if stage.tiles.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.label("No tiles. Press \"Add tile\" to start.");
                });
                return;
            }

            let painter = ui.painter_at(area);
            for tile in &stage.tiles {
                let Some(r) = stage.rendered.get(&tile.id) else {
                    continue;
                };
                let draw_rect = to_screen(*r, area.min).shrink(1.0);
                if draw_rect.width() < 1.0 || draw_rect.height() < 1.0 {
                    continue;
                }

                let col = tile_color(tile.color_index, self.hovered == Some(tile.id));
                painter.rect_filled(draw_rect, 3.0, col);
                if tile.big {
                    painter.rect_stroke(
                        draw_rect,
                        3.0,
                        egui::Stroke::new(2.0, egui::Color32::WHITE),
                        egui::StrokeKind::Inside,
                    );
                }
                if draw_rect.width() > 40.0 && draw_rect.height() > 20.0 {
                    let label = if tile.big {
                        format!("#{} (big)", tile.id)
                    } else {
                        format!("#{}", tile.id)
                    };
                    painter.text(
                        draw_rect.min + egui::vec2(6.0, 4.0),
                        egui::Align2::LEFT_TOP,
                        label,
                        egui::FontId::proportional(13.0),
                        text_color_for(col),
                    );
                    if draw_rect.height() > 40.0 {
                        painter.text(
                            draw_rect.min + egui::vec2(6.0, 20.0),
                            egui::Align2::LEFT_TOP,
                            format!("{:.0} x {:.0}", r.width, r.height),
                            egui::FontId::proportional(10.0),
                            text_color_for(col).gamma_multiply(0.7),
                        );
                    }
                }
            }

            // --- Input handling ---
            let response = ui.allocate_rect(area, egui::Sense::click());
            self.hovered = response
                .hover_pos()
                .and_then(|pos| self.tile_at(pos, area.min));

            // Left click → make the clicked tile big
            if response.clicked() {
                if let Some(id) = self.hovered {
                    self.container.surface_mut().toggle_big(id);
                    self.needs_layout = true;
                    ctx.request_repaint();
                }
            }

            // Keyboard: A adds, Backspace/Delete removes, Escape clears big
            if ctx.input(|i| i.key_pressed(egui::Key::A)) {
                self.container.surface_mut().add_tile();
                self.needs_layout = true;
            }
            let remove = ctx.input(|i| {
                i.key_pressed(egui::Key::Backspace) || i.key_pressed(egui::Key::Delete)
            });
            if remove {
                self.container.surface_mut().remove_tile();
                self.needs_layout = true;
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.container.surface_mut().clear_big();
                self.needs_layout = true;
            }
            if self.needs_layout {
                ctx.request_repaint();
            }
        });
    }
}

fn to_screen(r: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + r.left as f32, origin.y + r.top as f32),
        egui::vec2(r.width as f32, r.height as f32),
    )
}

// ===================== Colors =====================

const PALETTE: [(u8, u8, u8); 8] = [
    (66, 133, 244),  // blue
    (52, 168, 83),   // green
    (251, 188, 4),   // yellow
    (234, 67, 53),   // red
    (171, 71, 188),  // purple
    (0, 172, 193),   // teal
    (255, 112, 67),  // orange
    (63, 81, 181),   // indigo
];

fn tile_color(ci: usize, hovered: bool) -> egui::Color32 {
    let (r, g, b) = PALETTE[ci % PALETTE.len()];
    if hovered {
        egui::Color32::from_rgb(r.saturating_add(35), g.saturating_add(35), b.saturating_add(35))
    } else {
        egui::Color32::from_rgb(r, g, b)
    }
}

fn text_color_for(bg: egui::Color32) -> egui::Color32 {
    let lum = 0.299 * bg.r() as f64 + 0.587 * bg.g() as f64 + 0.114 * bg.b() as f64;
    if lum > 150.0 {
        egui::Color32::from_gray(20)
    } else {
        egui::Color32::from_gray(235)
    }
}
