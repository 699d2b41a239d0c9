pub mod app_orchestrator;
pub mod recognition_flow;
