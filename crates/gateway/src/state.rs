use inference::ControllerHandle;

#[derive(Clone)]
pub struct AppState {
    pub controller: ControllerHandle,
}

impl AppState {
    pub fn new(controller: ControllerHandle) -> Self {
        Self { controller }
    }
}
