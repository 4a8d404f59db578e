use crate::backend::StyleBackend;
use crate::config::StylingConfig;
use crate::context::{ModelState, SessionContext, SourceState, SourceUpdate};
use crate::model::spawn_model_load;
use crate::pipeline::{StyleOutcome, StylePipeline};
use crate::source::{SourceOrigin, acquire_source};
use crate::surface::{Surface, SurfaceKind};
use crate::StyleError;
use preprocess::PixelBuffer;
use serde::Serialize;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

const COMMAND_QUEUE_SIZE: usize = 32;

/// Completion of a background load.
pub enum Event<B> {
    ModelLoaded(anyhow::Result<B>),
    SourceDecoded {
        generation: u64,
        result: Result<PixelBuffer, StyleError>,
    },
}

enum Command {
    LoadSource {
        origin: SourceOrigin,
        reply: oneshot::Sender<Result<u64, StyleError>>,
    },
    Style {
        reply: oneshot::Sender<Result<StyleOutcome, StyleError>>,
    },
    Snapshot {
        surface: SurfaceKind,
        reply: oneshot::Sender<PixelBuffer>,
    },
    Status {
        reply: oneshot::Sender<SessionStatus>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub model: ModelState,
    pub source: SourceState,
    pub styled_draws: u64,
    pub input_resolution: u32,
    pub display_resolution: u32,
}

/// Owns the session context and both surfaces. All reads and writes go through
/// its task, one message at a time.
pub struct Controller<B: StyleBackend> {
    config: StylingConfig,
    context: SessionContext<B>,
    pipeline: StylePipeline,
    source_surface: Surface,
    styled_surface: Surface,
    events_tx: mpsc::UnboundedSender<Event<B>>,
    events_rx: mpsc::UnboundedReceiver<Event<B>>,
    commands_rx: mpsc::Receiver<Command>,
}

impl<B: StyleBackend> Controller<B> {
    /// Starts the controller task, the model load and (if configured) the example load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(config: StylingConfig, load_model: F) -> (ControllerHandle, JoinHandle<()>)
    where
        F: FnOnce(&str) -> anyhow::Result<B> + Send + 'static,
    {
        let (commands_tx, commands_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        spawn_model_load(config.model_location.clone(), load_model, events_tx.clone());

        let display = config.dimensions.display;
        let mut controller = Self {
            pipeline: StylePipeline::new(config.dimensions),
            context: SessionContext::new(),
            source_surface: Surface::new(display),
            styled_surface: Surface::new(display),
            config,
            events_tx,
            events_rx,
            commands_rx,
        };

        if controller.config.load_example_on_start {
            controller.request_source(SourceOrigin::Example);
        }

        let task = tokio::spawn(controller.run());

        (
            ControllerHandle {
                commands: commands_tx,
            },
            task,
        )
    }

    async fn run(mut self) {
        tracing::info!(
            input_resolution = self.config.dimensions.input,
            display_resolution = self.config.dimensions.display,
            "Styling controller started"
        );

        loop {
            tokio::select! {
                Some(event) = self.events_rx.recv() => self.apply_event(event),
                command = self.commands_rx.recv() => match command {
                    Some(command) => {
                        self.drain_events();
                        self.handle_command(command);
                    }
                    None => break,
                },
            }
        }

        tracing::info!("Styling controller stopped");
    }

    /// Applies every completion that has already arrived, without waiting for more.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: Event<B>) {
        match event {
            Event::ModelLoaded(Ok(model)) => {
                tracing::info!(location = %self.config.model_location, "Style model ready");
                self.context.install_model(model);
            }
            Event::ModelLoaded(Err(e)) => {
                tracing::error!(
                    error = %e,
                    location = %self.config.model_location,
                    "Failed to load style model, styling disabled for this session"
                );
                self.context.model_failed(format!("{e:#}"));
            }
            Event::SourceDecoded { generation, result } => {
                match self.context.complete_source(generation, result) {
                    SourceUpdate::Stale => {
                        tracing::debug!(generation, "Discarding stale source image");
                    }
                    SourceUpdate::Ready => {
                        if let Some(pixels) = self.context.source() {
                            self.source_surface.draw(pixels.clone());
                        }
                        tracing::info!(generation, "Source image ready");
                    }
                    SourceUpdate::Failed { reason } => {
                        self.source_surface.clear();
                        tracing::warn!(generation, reason = %reason, "Source image unusable");
                    }
                }
            }
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::LoadSource { origin, reply } => {
                let empty_upload =
                    matches!(&origin, SourceOrigin::Upload(bytes) if bytes.is_empty());
                let result = if empty_upload {
                    Err(StyleError::EmptyUpload)
                } else {
                    Ok(self.request_source(origin))
                };
                let _ = reply.send(result);
            }
            Command::Style { reply } => {
                let Self {
                    pipeline,
                    context,
                    styled_surface,
                    ..
                } = self;
                let result = run_blocking(|| pipeline.run(context, styled_surface));
                if let Err(e) = &result {
                    tracing::error!(error = %e, "Styling failed");
                }
                let _ = reply.send(result);
            }
            Command::Snapshot { surface, reply } => {
                let pixels = match surface {
                    SurfaceKind::Source => self.source_surface.pixels(),
                    SurfaceKind::Styled => self.styled_surface.pixels(),
                };
                let _ = reply.send(pixels.clone());
            }
            Command::Status { reply } => {
                let _ = reply.send(self.status());
            }
        }
    }

    fn request_source(&mut self, origin: SourceOrigin) -> u64 {
        let generation = self.context.begin_source_request();
        tracing::debug!(generation, origin = origin.label(), "Requesting source image");

        let events = self.events_tx.clone();
        let example = self.config.example.clone();
        let display = self.config.dimensions.display;

        tokio::spawn(async move {
            let result = acquire_source(origin, &example, display).await;
            let _ = events.send(Event::SourceDecoded { generation, result });
        });

        generation
    }

    fn status(&self) -> SessionStatus {
        let dimensions = self.pipeline.dimensions();
        SessionStatus {
            model: self.context.model_state().clone(),
            source: self.context.source_state().clone(),
            styled_draws: self.styled_surface.draw_count(),
            input_resolution: dimensions.input,
            display_resolution: dimensions.display,
        }
    }
}

/// Runs model work without stalling the other tasks on this worker.
///
/// A current-thread runtime has no worker to hand off, so the work runs inline there.
fn run_blocking<T>(work: impl FnOnce() -> T) -> T {
    match Handle::try_current().map(|handle| handle.runtime_flavor()) {
        Ok(RuntimeFlavor::MultiThread) => tokio::task::block_in_place(work),
        _ => work(),
    }
}

/// Cloneable entry point to a running controller.
#[derive(Clone)]
pub struct ControllerHandle {
    commands: mpsc::Sender<Command>,
}

impl ControllerHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, StyleError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| StyleError::ControllerClosed)?;
        response.await.map_err(|_| StyleError::ControllerClosed)
    }

    /// Starts acquiring a new source image and returns its generation.
    ///
    /// Decoding happens in the background; the returned generation shows up in
    /// [`SessionStatus::source`] once it completes.
    pub async fn load_source(&self, origin: SourceOrigin) -> Result<u64, StyleError> {
        self.request(|reply| Command::LoadSource { origin, reply })
            .await?
    }

    pub async fn style(&self) -> Result<StyleOutcome, StyleError> {
        self.request(|reply| Command::Style { reply }).await?
    }

    pub async fn snapshot(&self, surface: SurfaceKind) -> Result<PixelBuffer, StyleError> {
        self.request(|reply| Command::Snapshot { surface, reply })
            .await
    }

    pub async fn status(&self) -> Result<SessionStatus, StyleError> {
        self.request(|reply| Command::Status { reply }).await
    }
}
