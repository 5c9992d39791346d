use crate::controller::ViewController;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<Mutex<ViewController>>,
}

impl AppState {
    pub fn new(controller: ViewController) -> Self {
        Self {
            view: Arc::new(Mutex::new(controller)),
        }
    }
}
