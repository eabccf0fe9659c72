use crate::run_worker::{RunWorker, WorkerMessage};
use crate::views::{PlotView, RunView};
use std::path::PathBuf;
use sv_app::{ConfigOverrides, RunProgressEvent, RunSummary, query};
use sv_sim::SimEvent;

pub struct SteamVesselApp {
    run_view: RunView,
    plot_view: PlotView,
    run_worker: Option<RunWorker>,
    latest_progress: Option<RunProgressEvent>,
    last_worker_message: Option<String>,
    summary: Option<RunSummary>,
    events: Vec<SimEvent>,
}

impl SteamVesselApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            run_view: RunView::default(),
            plot_view: PlotView::default(),
            run_worker: None,
            latest_progress: None,
            last_worker_message: None,
            summary: None,
            events: Vec::new(),
        }
    }

    fn start_run(&mut self) {
        let path = self.run_view.config_path.trim();
        let config_path = (!path.is_empty()).then(|| PathBuf::from(path));
        let overrides = ConfigOverrides {
            duration_min: Some(self.run_view.duration_min),
            dt_s: Some(self.run_view.dt_s),
        };
        self.last_worker_message = None;
        self.latest_progress = None;
        self.summary = None;
        self.events.clear();
        self.run_worker = Some(RunWorker::start(config_path, overrides));
    }

    fn poll_worker(&mut self) {
        let mut finished = false;

        if let Some(worker) = &self.run_worker {
            while let Ok(msg) = worker.progress_rx.try_recv() {
                match msg {
                    WorkerMessage::Progress(event) => {
                        self.latest_progress = Some(event);
                    }
                    WorkerMessage::Complete(response) => {
                        self.plot_view.set_record(&response.record);
                        self.events = response.record.events.clone();
                        match query::get_run_summary(
                            &response.record,
                            &response.config,
                            &response.constants,
                        ) {
                            Ok(summary) => self.summary = Some(summary),
                            Err(e) => self.last_worker_message = Some(e.to_string()),
                        }
                        if self.last_worker_message.is_none() {
                            self.last_worker_message = Some(format!(
                                "Completed {} steps in {:.3}s",
                                response.timing.steps, response.timing.solve_time_s
                            ));
                        }
                        finished = true;
                    }
                    WorkerMessage::Error { message } => {
                        self.last_worker_message = Some(message);
                        finished = true;
                    }
                }
            }
        }

        if finished {
            self.run_worker = None;
            self.latest_progress = None;
        }
    }
}

impl eframe::App for SteamVesselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        let running = self.run_worker.is_some();
        egui::SidePanel::left("run_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                let actions = self.run_view.show(
                    ui,
                    running,
                    self.latest_progress.as_ref(),
                    self.summary.as_ref(),
                    &self.events,
                    self.last_worker_message.as_deref(),
                );
                if actions.start_run {
                    self.start_run();
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_view.show(ui);
        });

        if self.run_worker.is_some() {
            ctx.request_repaint();
        }
    }
}
