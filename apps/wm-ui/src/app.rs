use chrono::Local;
use wm_app::{AppConfig, EntryForm, MapCamera, Session, markers_for, resolve_position};
use wm_core::{Workout, WorkoutId};
use wm_store::{FileBlobStore, WorkoutStore};

use crate::map_panel::{MapAction, MapPanel};
use crate::views::{self, FormAction, ListAction};

pub struct WaymarkApp {
    session: Option<Session<FileBlobStore>>,
    form: EntryForm,
    camera: Option<MapCamera>,
    map: MapPanel,
    notice: Option<String>,
}

impl WaymarkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());

        let mut notice = None;
        let config = match AppConfig::load_or_default(&cwd) {
            Ok(config) => config,
            Err(e) => {
                notice = Some(format!("Could not read configuration: {e}"));
                AppConfig::default()
            }
        };

        // The map exists only once a position resolves.
        let camera = match resolve_position(&config) {
            Ok(position) => Some(MapCamera::new(position, config.zoom)),
            Err(_) => {
                notice.get_or_insert_with(|| "Could not get your position".to_string());
                None
            }
        };

        let data_dir = config
            .data_dir
            .clone()
            .unwrap_or_else(|| cwd.join(".waymark"));
        let session = match FileBlobStore::new(data_dir) {
            Ok(blob) => {
                let (session, load_err) = Session::open_or_empty(WorkoutStore::new(blob));
                if let Some(e) = load_err {
                    notice = Some(format!("Could not load stored workouts: {e}"));
                }
                Some(session)
            }
            Err(e) => {
                notice = Some(format!("Could not open workout storage: {e}"));
                None
            }
        };

        Self {
            session,
            form: EntryForm::default(),
            camera,
            map: MapPanel::new(),
            notice,
        }
    }

    fn commit_form(&mut self) {
        let workout = match self.form.submit(Local::now()) {
            Ok(workout) => workout,
            Err(e) => {
                self.notice = Some(e.to_string());
                return;
            }
        };

        match &mut self.session {
            Some(session) => {
                if let Err(e) = session.add(workout) {
                    self.notice = Some(format!("Could not save workout: {e}"));
                }
            }
            None => {
                self.notice = Some("Workout storage is unavailable".to_string());
            }
        }
    }

    fn focus_workout(&mut self, id: &WorkoutId, ctx: &egui::Context) {
        let Some(session) = &self.session else { return };
        let Some(camera) = &mut self.camera else {
            return;
        };
        if let Some(workout) = session.find(id) {
            camera.fly_to(workout.location());
            ctx.request_repaint();
        }
    }

    fn delete_workout(&mut self, id: &WorkoutId) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session.delete(id) {
            Ok(_) => {
                // Drop retained view state so every view rebuilds from the
                // session.
                self.map.reset();
                self.form.dismiss();
            }
            Err(e) => self.notice = Some(format!("Could not delete workout: {e}")),
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(text) = self.notice.clone() else {
            return;
        };
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(text);
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    self.notice = None;
                }
            });
    }
}

impl eframe::App for WaymarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        if let Some(camera) = &mut self.camera {
            if camera.tick(dt) {
                ctx.request_repaint();
            }
        }

        // While a notice is up, interactions underneath are rendered but
        // their actions are dropped.
        let notice_active = self.notice.is_some();

        let (form_action, list_action) = egui::SidePanel::left("workouts")
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Waymark");
                ui.separator();

                let form_action = if self.form.is_open() {
                    let action = views::form_view::show(ui, &mut self.form);
                    ui.separator();
                    action
                } else {
                    if self.camera.is_some() {
                        ui.label("Click the map to log a workout");
                        ui.separator();
                    }
                    None
                };

                let workouts: &[Workout] =
                    self.session.as_ref().map_or(&[], |s| s.workouts());
                let list_action = views::list_view::show(ui, workouts);

                (form_action, list_action)
            })
            .inner;

        let map_action = egui::CentralPanel::default()
            .show(ctx, |ui| match &mut self.camera {
                Some(camera) => {
                    let markers = self
                        .session
                        .as_ref()
                        .map(|s| markers_for(s.workouts()))
                        .unwrap_or_default();
                    self.map.show(ui, camera, &markers)
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Map unavailable: position could not be determined");
                    });
                    None
                }
            })
            .inner;

        if !notice_active {
            if let Some(MapAction::Clicked(point)) = map_action {
                self.form.open_at(point);
            }
            match form_action {
                Some(FormAction::Submit) => self.commit_form(),
                Some(FormAction::Dismiss) => self.form.dismiss(),
                None => {}
            }
            match list_action {
                Some(ListAction::Focus(id)) => self.focus_workout(&id, ctx),
                Some(ListAction::Delete(id)) => self.delete_workout(&id),
                None => {}
            }
        }

        self.show_notice(ctx);
    }
}
