use sv_sim::SimProgress;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunStage {
    LoadingConfig,
    Validating,
    Simulating,
    Completed,
}

impl RunStage {
    pub fn label(&self) -> &'static str {
        match self {
            RunStage::LoadingConfig => "loading config",
            RunStage::Validating => "validating",
            RunStage::Simulating => "simulating",
            RunStage::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    pub sim: Option<SimProgress>,
}

impl RunProgressEvent {
    pub fn stage(stage: RunStage, elapsed_wall_s: f64, message: Option<String>) -> Self {
        Self {
            stage,
            elapsed_wall_s,
            message,
            sim: None,
        }
    }
}
