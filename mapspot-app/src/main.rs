use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use mapspot::{
    input::handler::InputHandler,
    layers::scene::SceneSnapshot,
    AnimatedSurface, Dataset, MapInput, MapSession, PanZoomSurface, Point, SessionBuilder, Size,
    Transform,
};

const DEMO_DATASET: &str = r#"{
    "unit": "percent",
    "options": { "focus": { "target_scale": 3.0 }, "label": { "placement": "above" } },
    "points": [
        { "id": 1, "name": "Main Hall", "category": "museum", "left": 30, "top": 20, "width": 3 },
        { "id": 2, "name": "Sculpture Court", "category": "museum", "left": 62, "top": 28, "width": 3 },
        { "id": 3, "name": "North Wall", "category": "wall", "left": 12, "top": 48, "width": 3 },
        { "id": 4, "name": "East Wall", "category": "wall", "left": 85, "top": 55, "width": 3 },
        { "id": 5, "name": "Main Gate", "category": "entrance", "left": 50, "top": 88, "width": 3 },
        { "id": 6, "name": "Garden Gate", "category": "entrance", "left": 20, "top": 80, "width": 3 }
    ]
}"#;

/// Standalone map viewer application
fn main() -> Result<(), Box<dyn std::error::Error>> {
    mapspot::init_debug_logging();

    let dataset = match std::env::args().nth(1) {
        Some(path) => Dataset::from_path(&path)?,
        None => Dataset::from_json_str(DEMO_DATASET)?,
    };
    log::info!("loaded {} points", dataset.len());

    let session = SessionBuilder::new().with_dataset(dataset).build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Mapspot - Point of Interest Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "mapspot-app",
        options,
        Box::new(|cc| Box::new(MapspotApp::new(cc, session))),
    )?;

    Ok(())
}

struct MapspotApp {
    session: MapSession<AnimatedSurface>,
    handler: InputHandler,
}

impl MapspotApp {
    fn new(_cc: &eframe::CreationContext<'_>, mut session: MapSession<AnimatedSurface>) -> Self {
        // Sizes are unknown until the first layout pass
        session.attach_surface(AnimatedSurface::new(Size::default(), Size::default()));
        Self {
            session,
            handler: InputHandler::new(),
        }
    }

    fn filter_bar(&mut self, ui: &mut egui::Ui, snapshot: &SceneSnapshot) {
        ui.horizontal(|ui| {
            ui.label("Show:");
            for option in &snapshot.filters {
                let text = option.category.as_deref().unwrap_or("all");
                if ui.selectable_label(option.selected, text).clicked() {
                    self.session
                        .handle_input(MapInput::SetFilter(option.category.clone()));
                }
            }

            ui.separator();
            if ui.button("+").clicked() {
                self.session.handle_input(MapInput::ZoomIn);
            }
            if ui.button("-").clicked() {
                self.session.handle_input(MapInput::ZoomOut);
            }
            if ui.button("Reset").clicked() {
                self.session.handle_input(MapInput::ResetView);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let t = snapshot.transform;
                ui.label(format!(
                    "Offset: {:.0}, {:.0} | Zoom: {:.2}x",
                    t.translate_x, t.translate_y, t.scale
                ));
            });
        });
    }

    fn point_list(&mut self, ui: &mut egui::Ui, snapshot: &SceneSnapshot) {
        ui.heading("Places");
        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for entry in &snapshot.list {
                if ui.selectable_label(entry.active, entry.name.as_str()).clicked() {
                    self.session.select(entry.id.clone());
                }
            }
        });
    }

    fn map_area(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let size = Size::new(rect.width() as f64, rect.height() as f64);

        // The image is laid out to fill the container at 1x
        if let Some(surface) = self.session.surface_mut() {
            surface.set_container_size(size);
            surface.set_content_size(size);
            surface.update();
            if surface.is_animating() {
                ui.ctx().request_repaint();
            }
        }

        let origin = rect.min.to_vec2();
        let local = |pos: Pos2| Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64);

        if response.dragged() {
            let delta = response.drag_delta();
            if let Some(surface) = self.session.surface_mut() {
                surface.pan_by(Point::new(delta.x as f64, delta.y as f64));
            }
        }
        if response.drag_released() {
            self.session.handle_input(MapInput::GestureEnd);
        }

        if let Some(pos) = response.hover_pos() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.session.handle_input(MapInput::Wheel {
                    position: local(pos),
                    notches: (scroll / 50.0) as f64,
                });
            }
        }

        let snapshot = self.session.snapshot();
        let displayed = snapshot.displayed;

        match response.hover_pos() {
            Some(pos) => {
                for event in self.handler.pointer_moved(&snapshot.markers, &displayed, local(pos)) {
                    self.session.handle_input(event.into());
                }
            }
            None => {
                for event in self.handler.pointer_exited() {
                    self.session.handle_input(event.into());
                }
            }
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(event) = self.handler.clicked(&snapshot.markers, &displayed, local(pos)) {
                    self.session.handle_input(event.into());
                }
            }
        }

        // Redraw with the state the events above produced
        let snapshot = self.session.snapshot();
        let painter = ui.painter_at(rect);
        draw_scene(&painter, rect, size, &snapshot, ui.input(|i| i.time));
    }

    fn popup(&mut self, ctx: &egui::Context, snapshot: &SceneSnapshot) {
        let Some(popup) = &snapshot.popup else {
            return;
        };
        egui::Window::new(popup.name.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                ui.label(format!("Category: {}", popup.category));
                ui.label(format!("Id: {}", popup.id));
                if ui.button("Close").clicked() {
                    self.session.handle_input(MapInput::DismissPopup);
                }
            });
    }
}

fn to_screen(rect: Rect, transform: &Transform, point: Point) -> Pos2 {
    let screen = transform.apply(point);
    rect.min + Vec2::new(screen.x as f32, screen.y as f32)
}

fn draw_scene(
    painter: &egui::Painter,
    rect: Rect,
    content: Size,
    snapshot: &SceneSnapshot,
    time: f64,
) {
    let transform = &snapshot.displayed;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(40, 44, 52));

    // Stand-in for the map image
    let image_rect = Rect::from_min_max(
        to_screen(rect, transform, Point::new(0.0, 0.0)),
        to_screen(rect, transform, Point::new(content.width, content.height)),
    );
    painter.rect_filled(image_rect, 4.0, Color32::from_rgb(222, 214, 190));
    painter.rect_stroke(image_rect, 4.0, Stroke::new(1.0, Color32::from_rgb(120, 110, 90)));

    for marker in &snapshot.markers {
        let center = to_screen(rect, transform, marker.center);
        let mut radius = (marker.hit_radius() * transform.scale) as f32;
        if marker.pulsing() {
            radius *= 1.0 + 0.15 * (time * 4.0).sin().abs() as f32;
            painter.ctx().request_repaint();
        }

        let base = if marker.active {
            Color32::from_rgb(220, 70, 60)
        } else if marker.hovered {
            Color32::from_rgb(250, 170, 40)
        } else {
            Color32::from_rgb(50, 110, 200)
        };
        let alpha = (marker.opacity * 255.0).round() as u8;
        let fill = Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha);
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(1.5, Color32::from_rgba_unmultiplied(255, 255, 255, alpha)),
        );
    }

    if let Some(label) = &snapshot.label {
        let anchor = to_screen(rect, transform, label.anchor);
        let galley = painter.layout_no_wrap(
            label.text.clone(),
            FontId::proportional(14.0),
            Color32::WHITE,
        );
        let (fx, fy) = label.offset_fraction();
        let size = galley.size();
        let top_left = anchor + Vec2::new(size.x * fx as f32, size.y * fy as f32);
        painter.rect_filled(
            Rect::from_min_size(top_left, size).expand(4.0),
            3.0,
            Color32::from_black_alpha(200),
        );
        painter.galley(top_left, galley, Color32::WHITE);
    }
}

impl eframe::App for MapspotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.session.snapshot();

        egui::TopBottomPanel::top("filter_panel").show(ctx, |ui| {
            self.filter_bar(ui, &snapshot);
        });

        egui::SidePanel::left("list_panel")
            .resizable(true)
            .show(ctx, |ui| {
                self.point_list(ui, &snapshot);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.map_area(ui);
            });

        let snapshot = self.session.snapshot();
        self.popup(ctx, &snapshot);
    }
}
