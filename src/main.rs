use iced::widget::{button, checkbox, column, container, pick_list, row, text, Column};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use image::imageops::FilterType;
use image::DynamicImage;
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

// Declare the domain modules
mod convert;
mod state;
mod watch;

use convert::sizes::{IconSize, ICON_SIZES};
use convert::{encoder, loader};
use state::options::Options;
use state::session::{LoadedImage, Session, Source};

/// Icon search page opened by the "Find Icons" button
const FLATICON_URL: &str = "https://www.flaticon.com/";
/// Support page opened by the coffee button
const COFFEE_URL: &str = "https://buymeacoffee.com/bariselcii";

/// Side of the square preview area, in pixels
const PREVIEW_SIZE: u32 = 200;

/// Main application state
struct IcoForge {
    /// The image currently loaded for conversion
    session: Session,
    /// Thumbnail of the loaded image shown in the preview box
    preview: Option<iced::widget::image::Handle>,
    /// User-facing conversion options
    options: Options,
    /// The folder polled for new downloads
    downloads_dir: PathBuf,
    /// Whether the Downloads watcher is (still) running
    watching: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select PNG Image" button
    PickImage,
    /// User clicked "Browse" next to the output folder
    PickOutputFolder,
    /// User chose a size in the dropdown
    SizeSelected(IconSize),
    /// User toggled "Generate all common sizes"
    AllSizesToggled(bool),
    /// User toggled the auto-delete option
    AutoDeleteToggled(bool),
    /// User clicked the "Convert to ICO" button
    Convert,
    /// User clicked the Flaticon link button
    OpenFlaticon,
    /// User clicked the Buy Me a Coffee button
    OpenCoffee,
    /// The Downloads watcher produced an event
    Watch(watch::Event),
}

impl IcoForge {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let downloads_dir = watch::downloads_dir();
        let watching = downloads_dir.is_dir();

        let status = if watching {
            println!("🎨 PNG to ICO converter ready. Output folder: {}", downloads_dir.display());
            String::from("Ready.")
        } else {
            let warning = format!(
                "Downloads folder not found:\n{}\nAutomatic loading disabled.",
                downloads_dir.display()
            );
            eprintln!("⚠️  {}", warning);
            warning_dialog("Setup Warning", &warning);
            String::from("Error: Downloads folder missing.")
        };

        (
            IcoForge {
                session: Session::new(),
                preview: None,
                options: Options::new(downloads_dir.clone()),
                downloads_dir,
                watching,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                let picked = FileDialog::new()
                    .set_title("Select PNG Image")
                    .add_filter("PNG files", &["png"])
                    .pick_file();

                match picked {
                    Some(path) => self.load_image(path, Source::Dialog),
                    None => self.status = String::from("Image selection cancelled."),
                }
            }
            Message::PickOutputFolder => {
                let picked = FileDialog::new()
                    .set_title("Select Output Folder")
                    .set_directory(&self.options.output_dir)
                    .pick_folder();

                match picked {
                    Some(folder) => {
                        self.status = format!("Output folder set to: {}", folder.display());
                        self.options.output_dir = folder;
                    }
                    None => self.status = String::from("Output folder selection cancelled."),
                }
            }
            Message::SizeSelected(size) => self.options.size = size,
            Message::AllSizesToggled(checked) => self.options.all_sizes = checked,
            Message::AutoDeleteToggled(checked) => self.options.auto_delete = checked,
            Message::Convert => self.convert(),
            Message::OpenFlaticon => self.open_link("Flaticon", FLATICON_URL),
            Message::OpenCoffee => self.open_link("Buy Me a Coffee", COFFEE_URL),
            Message::Watch(event) => self.handle_watch_event(event),
        }

        Task::none()
    }

    /// Load, validate, and retain a PNG image
    fn load_image(&mut self, path: PathBuf, source: Source) {
        self.status = format!("Processing {}...", display_name(&path));

        match loader::load_png(&path) {
            Ok(image) => {
                self.preview = Some(preview_handle(&image));
                self.session.replace(LoadedImage::new(image, path.clone()));
                self.status = format!("Loaded: {}", display_name(&path));
                println!("🖼️  Loaded {}", path.display());

                // The decoded copy is already in memory, so deleting the
                // source file now is safe for conversion
                if source == Source::Download && self.options.auto_delete {
                    self.delete_source(&path);
                }
            }
            Err(err) => {
                eprintln!("⚠️  Image load failed: {}", err);
                self.status = format!("Error: {}", err);
                error_dialog(
                    "Image Error",
                    &format!("Could not load or process the image:\n{}", err),
                );
                self.reset();
            }
        }
    }

    /// Delete the source file of an auto-detected download
    fn delete_source(&mut self, path: &Path) {
        match watch::remove_from_watched(path, &self.downloads_dir) {
            Ok(true) => {
                println!("🗑️  Deleted {}", path.display());
                self.status = format!("Deleted original: {}", display_name(path));
            }
            Ok(false) => {}
            Err(err) => {
                eprintln!("⚠️  Could not delete {}: {}", path.display(), err);
                self.status = format!("Error deleting file: {}", err);
                warning_dialog(
                    "Deletion Error",
                    &format!(
                        "Could not delete {}:\n{}\nCheck file permissions or if it is in use.",
                        display_name(path),
                        err
                    ),
                );
            }
        }
    }

    /// Convert the in-memory image to an ICO file
    fn convert(&mut self) {
        let Some(loaded) = self.session.loaded() else {
            warning_dialog("No Image Data", "Please load a PNG image first.");
            self.status = String::from("Conversion failed: No image loaded.");
            return;
        };

        self.status = String::from("Converting...");

        let selection = self.options.selection();
        let filename = encoder::output_filename(&loaded.base_name(), &selection);
        let ico_path = self.options.output_dir.join(&filename);

        match encoder::export_ico(&loaded.image, &selection, &ico_path) {
            Ok(()) => {
                println!("✅ Saved {}", ico_path.display());
                self.status = format!("Saved: {}", filename);
                info_dialog(
                    "Success",
                    &format!("Image successfully converted!\nSaved as:\n{}", ico_path.display()),
                );
            }
            Err(err) => {
                eprintln!("⚠️  Conversion failed: {}", err);
                self.status = format!("Conversion Error: {}", err);
                error_dialog(
                    "Conversion Error",
                    &format!("Could not convert or save the ICO file:\n{}", err),
                );
                self.reset();
            }
        }
    }

    /// React to events from the Downloads watcher
    fn handle_watch_event(&mut self, event: watch::Event) {
        match event {
            watch::Event::Detected(path) => {
                self.status = format!("Detected new PNG: {}", display_name(&path));
                self.load_image(path, Source::Download);
            }
            watch::Event::ScanFailed(reason) => {
                self.status = format!("Warning: {}", reason);
            }
            watch::Event::Stopped(reason) => {
                self.watching = false;
                self.status = format!("Error: {}", reason);
            }
        }
    }

    /// Open one of the fixed project links in the default browser
    fn open_link(&mut self, label: &str, url: &str) {
        self.status = format!("Opening {}...", label);

        if let Err(err) = open::that(url) {
            eprintln!("⚠️  Could not open browser: {}", err);
            self.status = format!("Error opening browser: {}", err);
            error_dialog(
                "Browser Error",
                &format!("Could not open the web browser:\n{}", err),
            );
        }
    }

    /// Clear everything back to the "no image loaded" state
    fn reset(&mut self) {
        self.session.clear();
        self.preview = None;
        self.status = String::from("Ready.");
    }

    /// Poll the Downloads folder while it is still there
    fn subscription(&self) -> Subscription<Message> {
        if self.watching {
            Subscription::run(watch::poller::poll_downloads).map(Message::Watch)
        } else {
            Subscription::none()
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let preview: Element<Message> = match &self.preview {
            Some(handle) => iced::widget::image(handle.clone()).into(),
            None => text("No Image Selected").into(),
        };

        // The dropdown gives way to a label while "all sizes" is checked
        let size_picker: Element<Message> = if self.options.all_sizes {
            text("All common sizes").into()
        } else {
            pick_list(ICON_SIZES, Some(self.options.size), Message::SizeSelected).into()
        };

        let content: Column<Message> = column![
            text("PNG to ICO Converter").size(24),

            container(preview)
                .center_x(Length::Fixed(210.0))
                .center_y(Length::Fixed(210.0))
                .style(container::bordered_box),

            button("Select PNG Image")
                .on_press(Message::PickImage)
                .padding(8)
                .width(Length::Fill),

            row![text("ICO Size:"), size_picker]
                .spacing(10)
                .align_y(Alignment::Center),

            checkbox(
                "Generate all common sizes (16x16 to 256x256)",
                self.options.all_sizes,
            )
            .on_toggle(Message::AllSizesToggled),

            button("Convert to ICO")
                .on_press_maybe(self.session.has_image().then_some(Message::Convert))
                .padding(8)
                .width(Length::Fill),

            column![
                text("Output Folder").size(13),
                row![
                    text(self.options.output_dir.display().to_string()).size(13),
                    button("Browse").on_press(Message::PickOutputFolder),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            ]
            .spacing(5),

            button("Find Icons (Flaticon)")
                .on_press(Message::OpenFlaticon)
                .width(Length::Fill),

            button("☕ Buy Me a Coffee")
                .on_press(Message::OpenCoffee)
                .width(Length::Fill),

            checkbox(
                "Delete original PNG from Downloads after loading?",
                self.options.auto_delete,
            )
            .on_toggle(Message::AutoDeleteToggled),

            text(self.status.as_str()).size(12),
        ]
        .spacing(12)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "PNG to ICO Converter",
        IcoForge::update,
        IcoForge::view,
    )
    .theme(IcoForge::theme)
    .subscription(IcoForge::subscription)
    .window(window::Settings {
        size: Size::new(380.0, 720.0),
        resizable: false,
        icon: window_icon(),
        ..window::Settings::default()
    })
    .centered()
    .run_with(IcoForge::new)
}

/// Load the window icon if one ships next to the binary
///
/// Packaged builds carry assets/icon.png; development runs without it and
/// simply get the default window chrome.
fn window_icon() -> Option<window::Icon> {
    window::icon::from_file("assets/icon.png").ok()
}

/// Build the preview thumbnail shown in the UI
///
/// Large images are scaled down to fit the preview box; smaller ones are
/// shown as-is instead of being blown up.
fn preview_handle(image: &DynamicImage) -> iced::widget::image::Handle {
    let preview = if image.width() > PREVIEW_SIZE || image.height() > PREVIEW_SIZE {
        image.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3)
    } else {
        image.clone()
    };

    let rgba = preview.to_rgba8();
    let (width, height) = rgba.dimensions();
    iced::widget::image::Handle::from_rgba(width, height, rgba.into_raw())
}

/// Just the filename, for status lines
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn error_dialog(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .show();
}

fn warning_dialog(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .show();
}

fn info_dialog(title: &str, description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(description)
        .show();
}
