use super::options::Options;
use crate::{
    context::Context as ApplicationContext,
    infrastructure::Console,
    ir::Label,
};
use dashmap::DashMap;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::{Mutex, Semaphore};

pub struct Context {
    application: Arc<ApplicationContext>,
    target_files: DashMap<Label, Vec<String>>,
    job_semaphore: Semaphore,
    failed: AtomicBool,
    options: Options,
}

impl Context {
    pub fn new(application: Arc<ApplicationContext>, options: Options) -> Self {
        Self {
            application,
            target_files: DashMap::new(),
            job_semaphore: Semaphore::new(
                options.job_limit.unwrap_or_else(num_cpus::get).max(1),
            ),
            failed: AtomicBool::new(false),
            options,
        }
    }

    pub fn application(&self) -> &ApplicationContext {
        &self.application
    }

    pub fn console(&self) -> &Mutex<Box<dyn Console + Send + Sync>> {
        self.application.console()
    }

    pub fn target_files(&self) -> &DashMap<Label, Vec<String>> {
        &self.target_files
    }

    pub fn job_semaphore(&self) -> &Semaphore {
        &self.job_semaphore
    }

    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    pub fn fail(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
