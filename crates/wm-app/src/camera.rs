//! Map camera: center, zoom, and the animated re-center glide.

use wm_core::GeoPoint;

pub const DEFAULT_ZOOM: f64 = 13.0;
pub const MIN_ZOOM: f64 = 2.0;
pub const MAX_ZOOM: f64 = 18.0;

const GLIDE_SECONDS: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct MapCamera {
    center: GeoPoint,
    zoom: f64,
    glide: Option<Glide>,
}

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: GeoPoint,
    to: GeoPoint,
    progress: f32,
}

impl MapCamera {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            glide: None,
        }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Instant move, cancelling any glide in progress.
    pub fn jump_to(&mut self, target: GeoPoint) {
        self.center = target;
        self.glide = None;
    }

    /// Begin an animated transition toward `target`.
    pub fn fly_to(&mut self, target: GeoPoint) {
        self.glide = Some(Glide {
            from: self.center,
            to: target,
            progress: 0.0,
        });
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Advance the glide by `dt` seconds. Returns true while still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(glide) = &mut self.glide else {
            return false;
        };
        glide.progress = (glide.progress + dt / GLIDE_SECONDS).min(1.0);
        let t = f64::from(smoothstep(glide.progress));
        self.center = GeoPoint {
            lat: glide.from.lat + (glide.to.lat - glide.from.lat) * t,
            lon: glide.from.lon + (glide.to.lon - glide.from.lon) * t,
        };
        if glide.progress >= 1.0 {
            self.center = glide.to;
            self.glide = None;
            return false;
        }
        true
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = MapCamera::new(point(0.0, 0.0), 99.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
        camera.set_zoom(-3.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn glide_converges_to_target() {
        let mut camera = MapCamera::new(point(0.0, 0.0), DEFAULT_ZOOM);
        let target = point(10.0, 20.0);
        camera.fly_to(target);
        assert!(camera.is_gliding());

        let mut steps = 0;
        while camera.tick(0.1) {
            steps += 1;
            assert!(steps < 100, "glide never finished");
        }
        assert_eq!(camera.center(), target);
        assert!(!camera.is_gliding());
    }

    #[test]
    fn jump_cancels_glide() {
        let mut camera = MapCamera::new(point(0.0, 0.0), DEFAULT_ZOOM);
        camera.fly_to(point(10.0, 20.0));
        camera.jump_to(point(-5.0, -5.0));
        assert!(!camera.is_gliding());
        assert_eq!(camera.center(), point(-5.0, -5.0));
    }

    #[test]
    fn tick_without_glide_is_idle() {
        let mut camera = MapCamera::new(point(1.0, 1.0), DEFAULT_ZOOM);
        assert!(!camera.tick(0.5));
        assert_eq!(camera.center(), point(1.0, 1.0));
    }
}
