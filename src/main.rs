use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

mod config;
mod encoder;
mod gemini;
mod logging;
mod state;
mod ui;

use config::{Config, EnvProvider};
use encoder::{EncodeError, ImageSelection, ACCEPTED_EXTENSIONS};
use gemini::{GeminiClient, GeneratedImage, TryOnClient, TryOnError};
use state::{Controller, Slot, Submission, TryOnResult};
use ui::spinner::Spinner;
use ui::{Previews, ThemeMode};

/// Spinner frame interval
const TICK: Duration = Duration::from_millis(33);

/// Main application state
struct TryOnStudio {
    /// Selections, in-flight flag and last result
    controller: Controller,
    /// Shared with the in-flight task
    client: Arc<TryOnClient<GeminiClient>>,
    /// Decoded handles for everything on screen
    previews: Previews,
    spinner: Spinner,
    theme_mode: ThemeMode,
    /// Problems loading a picked file (the selection is left as it was)
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked an upload card
    PickImage(Slot),
    /// File dialog closed; `None` if the user cancelled
    ImagePicked(Slot, Option<Result<ImageSelection, EncodeError>>),
    /// User clicked "Try It On!"
    TryOn,
    /// The service call completed
    TryOnFinished(Result<GeneratedImage, TryOnError>),
    ToggleTheme,
    /// Put the generated image on the clipboard as a data URL
    CopyResult,
    /// Spinner animation frame
    Tick,
}

impl TryOnStudio {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let client = GeminiClient::new(&config);
        tracing::info!(endpoint = %client.endpoint(), "🎨 Virtual try-on ready");

        (
            TryOnStudio {
                controller: Controller::new(),
                client: Arc::new(TryOnClient::new(client)),
                previews: Previews::default(),
                spinner: Spinner::default(),
                theme_mode: ThemeMode::default(),
                status: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage(slot) => {
                Task::perform(pick_image(slot), move |picked| Message::ImagePicked(slot, picked))
            }
            Message::ImagePicked(slot, picked) => {
                match picked {
                    Some(Ok(selection)) => {
                        tracing::info!(
                            ?slot,
                            file = %selection.file_name(),
                            media_type = %selection.media_type(),
                            "📷 Image selected"
                        );
                        self.previews.set(slot, &selection);
                        self.controller.select(slot, selection);
                        self.status = None;
                    }
                    Some(Err(e)) => {
                        tracing::warn!("⚠️  {}", e);
                        self.status = Some(e.to_string());
                    }
                    None => {}
                }
                Task::none()
            }
            Message::TryOn => match self.controller.begin_submit() {
                Submission::Started(request) => {
                    tracing::info!("👗 Starting try-on");
                    self.previews.set_result(None);
                    let client = Arc::clone(&self.client);
                    Task::perform(
                        async move { client.try_on(&request).await },
                        Message::TryOnFinished,
                    )
                }
                Submission::Rejected => {
                    self.previews.set_result(None);
                    Task::none()
                }
                Submission::Ignored => Task::none(),
            },
            Message::TryOnFinished(outcome) => {
                self.controller.finish(outcome);
                tracing::debug!(phase = ?self.controller.phase(), "Try-on settled");
                match self.controller.last_result() {
                    Some(TryOnResult::Success(image)) => self.previews.set_result(Some(image)),
                    _ => self.previews.set_result(None),
                }
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                Task::none()
            }
            Message::CopyResult => match self.controller.last_result() {
                Some(TryOnResult::Success(image)) => {
                    tracing::info!("📋 Copied generated image to clipboard");
                    iced::clipboard::write(image.data_url())
                }
                _ => Task::none(),
            },
            Message::Tick => {
                self.spinner.tick();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let uploads = row![
            self.upload_card(Slot::Person),
            self.upload_card(Slot::Clothing),
        ]
        .spacing(24);

        let label = if self.controller.is_in_flight() {
            "Generating Your New Look..."
        } else {
            "Try It On!"
        };
        let try_on = button(text(label).size(18))
            .on_press_maybe(self.controller.can_submit().then_some(Message::TryOn))
            .style(button::primary)
            .padding([12, 48]);

        let mut content = column![ui::header::view(self.theme_mode), uploads]
            .spacing(24)
            .align_x(Alignment::Center);

        if let Some(status) = &self.status {
            content = content.push(text(status).size(14).style(text::danger));
        }

        let content = content
            .push(try_on)
            .push(ui::result::view(
                self.controller.result_view(),
                self.previews.result(),
                &self.spinner,
            ))
            .push(text("Powered by Gemini. Created for demonstration purposes.").size(12));

        scrollable(
            container(content)
                .padding(32)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    fn upload_card(&self, slot: Slot) -> Element<'_, Message> {
        ui::uploader::view(
            slot,
            self.previews.get(slot),
            self.controller.selection(slot).map(|selection| selection.file_name()),
        )
    }

    /// Animate the spinner only while a request is out
    fn subscription(&self) -> Subscription<Message> {
        if self.controller.is_in_flight() {
            iced::time::every(TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }
}

fn main() -> ExitCode {
    // Load .env first so a RUST_LOG set there reaches the subscriber
    let dotenv = dotenvy::dotenv();
    logging::init();

    // A .env file is optional
    if let Err(e) = dotenv {
        tracing::debug!("No .env loaded: {}", e);
    }

    let config = match Config::load(&EnvProvider) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Refusing to start: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(source = config.api_key_source, model = %config.model, "🔑 API key found");

    let result = iced::application("AI Virtual Try-On", TryOnStudio::update, TryOnStudio::view)
        .subscription(TryOnStudio::subscription)
        .theme(TryOnStudio::theme)
        .window_size((1100.0, 960.0))
        .centered()
        .run_with(move || TryOnStudio::new(config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ UI error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Show the native picker for one slot and load whatever was picked
async fn pick_image(slot: Slot) -> Option<Result<ImageSelection, EncodeError>> {
    let file = AsyncFileDialog::new()
        .set_title(ui::uploader::label(slot))
        .add_filter("Images", &ACCEPTED_EXTENSIONS)
        .pick_file()
        .await?;

    Some(encoder::load_selection(file.path().to_path_buf()).await)
}
