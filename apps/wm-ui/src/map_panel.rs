//! Interactive map canvas.
//!
//! Web-Mercator projection at the camera zoom over a graticule background
//! (tile imagery is an external concern). Keeps the interaction surface of
//! a slippy map: click to get coordinates, zoom controls, markers with
//! closable popups, animated re-centering via the camera.

use std::collections::HashSet;

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, vec2};
use wm_app::{MapCamera, MarkerSpec, POPUP_MAX_WIDTH, POPUP_MIN_WIDTH};
use wm_core::{GeoPoint, WorkoutId};

use crate::views::kind_color;

const TILE_SIZE: f64 = 256.0;
const MARKER_STEM: f32 = 14.0;
const MARKER_RADIUS: f32 = 6.0;
const MARKER_HIT_RADIUS: f32 = 9.0;
const POPUP_PADDING: f32 = 8.0;
const POPUP_GAP: f32 = 24.0;

pub enum MapAction {
    Clicked(GeoPoint),
}

pub struct MapPanel {
    closed_popups: HashSet<WorkoutId>,
}

impl MapPanel {
    pub fn new() -> Self {
        Self {
            closed_popups: HashSet::new(),
        }
    }

    /// Forget retained popup state (used when the views are rebuilt).
    pub fn reset(&mut self) {
        self.closed_popups.clear();
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        camera: &mut MapCamera,
        markers: &[MarkerSpec],
    ) -> Option<MapAction> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, Color32::from_rgb(229, 233, 236));
        paint_graticule(&painter, rect, camera);

        // Markers first, popups on top of them.
        let mut head_hits: Vec<(WorkoutId, Pos2)> = Vec::new();
        let mut popup_hits: Vec<(WorkoutId, Rect, Rect)> = Vec::new();
        for marker in markers {
            let tip = project(marker.at, rect, camera);
            if !rect.expand(60.0).contains(tip) {
                continue;
            }
            let accent = kind_color(marker.kind);
            let head = paint_marker(&painter, tip, accent);
            head_hits.push((marker.id.clone(), head));
            if !self.closed_popups.contains(&marker.id) {
                let (popup_rect, close_rect) =
                    paint_popup(&painter, head, &marker.label, accent);
                popup_hits.push((marker.id.clone(), popup_rect, close_rect));
            }
        }

        // Floating zoom controls.
        let plus_rect = Rect::from_min_size(rect.left_top() + vec2(10.0, 10.0), vec2(24.0, 24.0));
        let minus_rect = Rect::from_min_size(rect.left_top() + vec2(10.0, 38.0), vec2(24.0, 24.0));
        if ui.put(plus_rect, egui::Button::new("+")).clicked() {
            camera.set_zoom(camera.zoom() + 1.0);
        }
        if ui.put(minus_rect, egui::Button::new("−")).clicked() {
            camera.set_zoom(camera.zoom() - 1.0);
        }

        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };
        let Some(pos) = click_pos else { return None };

        if plus_rect.contains(pos) || minus_rect.contains(pos) {
            return None;
        }

        // Popups claim clicks before the map; close boxes first.
        for (id, popup_rect, close_rect) in &popup_hits {
            if close_rect.contains(pos) {
                self.closed_popups.insert(id.clone());
                return None;
            }
            if popup_rect.contains(pos) {
                return None;
            }
        }

        // Clicking a marker re-opens its popup.
        for (id, head) in &head_hits {
            if head.distance(pos) <= MARKER_HIT_RADIUS {
                self.closed_popups.remove(id);
                return None;
            }
        }

        Some(MapAction::Clicked(unproject(pos, rect, camera)))
    }
}

fn world_extent(zoom: f64) -> f64 {
    TILE_SIZE * 2_f64.powf(zoom)
}

/// Web-Mercator world coordinates in pixels at the given world extent.
fn mercator(point: GeoPoint, world: f64) -> (f64, f64) {
    let x = (point.lon + 180.0) / 360.0 * world;
    let lat_rad = point.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * world;
    (x, y)
}

fn project(point: GeoPoint, rect: Rect, camera: &MapCamera) -> Pos2 {
    let world = world_extent(camera.zoom());
    let (cx, cy) = mercator(camera.center(), world);
    let (px, py) = mercator(point, world);
    Pos2::new(
        rect.center().x + (px - cx) as f32,
        rect.center().y + (py - cy) as f32,
    )
}

fn unproject(pos: Pos2, rect: Rect, camera: &MapCamera) -> GeoPoint {
    let world = world_extent(camera.zoom());
    let (cx, cy) = mercator(camera.center(), world);
    let x = cx + f64::from(pos.x - rect.center().x);
    let y = cy + f64::from(pos.y - rect.center().y);
    let lon = x / world * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / world);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint {
        lat: lat.clamp(-85.05, 85.05),
        lon: lon.clamp(-180.0, 180.0),
    }
}

fn paint_graticule(painter: &egui::Painter, rect: Rect, camera: &MapCamera) {
    let world = world_extent(camera.zoom());
    // Roughly 90 px between lines.
    let step = nice_step(90.0 / world * 360.0);
    let stroke = Stroke::new(1.0, Color32::from_rgb(208, 213, 218));

    let top_left = unproject(rect.left_top(), rect, camera);
    let bottom_right = unproject(rect.right_bottom(), rect, camera);

    let mut lon = (top_left.lon / step).floor() * step;
    while lon <= bottom_right.lon {
        let x = project(
            GeoPoint {
                lat: camera.center().lat,
                lon,
            },
            rect,
            camera,
        )
        .x;
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            stroke,
        );
        lon += step;
    }

    // Screen y grows downward while latitude shrinks.
    let mut lat = (bottom_right.lat / step).floor() * step;
    while lat <= top_left.lat {
        let y = project(
            GeoPoint {
                lat,
                lon: camera.center().lon,
            },
            rect,
            camera,
        )
        .y;
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            stroke,
        );
        lat += step;
    }
}

fn nice_step(raw: f64) -> f64 {
    let base = 10_f64.powf(raw.log10().floor());
    let mantissa = raw / base;
    let nice = if mantissa <= 1.0 {
        1.0
    } else if mantissa <= 2.0 {
        2.0
    } else if mantissa <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Draws a pin at `tip` and returns the head center used for hit-testing.
fn paint_marker(painter: &egui::Painter, tip: Pos2, color: Color32) -> Pos2 {
    let head = Pos2::new(tip.x, tip.y - MARKER_STEM);
    painter.line_segment([tip, head], Stroke::new(2.0, color));
    painter.circle_filled(head, MARKER_RADIUS, color);
    painter.circle_stroke(head, MARKER_RADIUS, Stroke::new(1.5, Color32::WHITE));
    head
}

/// Draws the popup above `head`; width stays inside the popup bounds.
/// Returns the popup rect and its close-box rect.
fn paint_popup(
    painter: &egui::Painter,
    head: Pos2,
    label: &str,
    accent: Color32,
) -> (Rect, Rect) {
    let galley = painter.layout(
        label.to_string(),
        FontId::proportional(13.0),
        Color32::from_gray(40),
        POPUP_MAX_WIDTH - 2.0 * POPUP_PADDING,
    );
    let width = (galley.size().x + 2.0 * POPUP_PADDING).clamp(POPUP_MIN_WIDTH, POPUP_MAX_WIDTH);
    let height = galley.size().y + 2.0 * POPUP_PADDING;
    let popup_rect = Rect::from_min_size(
        Pos2::new(head.x - width / 2.0, head.y - POPUP_GAP - height),
        vec2(width, height),
    );

    painter.rect(popup_rect, 6.0, Color32::WHITE, Stroke::new(2.0, accent));
    painter.galley(
        popup_rect.min + vec2(POPUP_PADDING, POPUP_PADDING),
        galley,
        Color32::from_gray(40),
    );

    let close_rect = Rect::from_center_size(
        Pos2::new(popup_rect.right() - 9.0, popup_rect.top() + 9.0),
        vec2(12.0, 12.0),
    );
    painter.text(
        close_rect.center(),
        Align2::CENTER_CENTER,
        "×",
        FontId::proportional(11.0),
        Color32::from_gray(120),
    );

    (popup_rect, close_rect)
}
