use clap::Parser;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{alignment, window, Element, Length, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

use stamps::scan::{self, ScanResult};
use stamps::{Settings, Surface, TileCollection};

mod ui;

/// Outer padding around the grid; the layout only gets what's inside it
const PADDING: f32 = 10.0;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about = "Thumbnail browser for planetary mission images")]
struct Args {
    /// Directory to open on start
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Tile width in pixels, margins included
    #[arg(long)]
    tile_width: Option<u32>,

    /// Tile height in pixels, margins included
    #[arg(long)]
    tile_height: Option<u32>,

    /// Initial window width in pixels
    #[arg(long)]
    width: Option<u32>,
}

/// Main application state
struct Stamps {
    settings: Settings,
    /// The grid, once a folder has been scanned
    surface: Option<Surface>,
    /// Width available to the grid, tracked even before a folder is open
    width: u32,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Open Folder" button
    OpenFolder,
    /// Background scan finished
    ScanComplete(Result<ScanResult, String>),
    /// User clicked the tile at this index
    TileClicked(usize),
    /// User clicked the "Select All" button
    SelectAll,
    /// The window was resized
    WindowResized(Size),
}

impl Stamps {
    /// Create a new instance of the application, scanning `path` if given
    fn new(settings: Settings, path: Option<PathBuf>) -> (Self, Task<Message>) {
        let width = available_width(settings.window_width as f32);

        let mut app = Stamps {
            settings,
            surface: None,
            width,
            status: "Open a folder of mission images.".to_string(),
        };

        let task = match path {
            Some(folder) => app.start_scan(folder),
            None => Task::none(),
        };

        (app, task)
    }

    fn start_scan(&mut self, folder: PathBuf) -> Task<Message> {
        self.status = format!("Scanning {}...", folder.display());
        Task::perform(
            scan::scan_folder_async(folder, self.settings.clone()),
            Message::ScanComplete,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Mission Images")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    return self.start_scan(folder_path);
                }

                Task::none()
            }
            Message::ScanComplete(Ok(result)) => {
                // A new folder gets a fresh surface, select-all toggle included
                match self.build_surface(result.collection) {
                    Ok(surface) => {
                        self.surface = Some(surface);
                        self.refresh_status();
                    }
                    Err(e) => {
                        log::error!("❌ Can't lay out {}: {}", result.root.display(), e);
                        self.status = format!("Can't lay out {}: {}", result.root.display(), e);
                    }
                }
                Task::none()
            }
            Message::ScanComplete(Err(e)) => {
                log::error!("❌ Scan failed: {}", e);
                self.status = format!("Scan failed: {}", e);
                Task::none()
            }
            Message::TileClicked(index) => {
                if let Some(surface) = &mut self.surface {
                    if let Err(e) = surface.click(index) {
                        log::warn!("⚠️  Click ignored: {}", e);
                    }
                }
                self.refresh_status();
                Task::none()
            }
            Message::SelectAll => {
                if let Some(surface) = &mut self.surface {
                    surface.select_all();
                }
                self.refresh_status();
                Task::none()
            }
            Message::WindowResized(size) => {
                let width = available_width(size.width);
                if width > 0 {
                    self.width = width;
                }
                if let Some(surface) = &mut self.surface {
                    // A rejected width keeps the previous layout; already logged
                    let _ = surface.resize(width);
                }
                self.refresh_status();
                Task::none()
            }
        }
    }

    fn build_surface(&self, collection: TileCollection) -> stamps::Result<Surface> {
        Surface::new(collection, self.settings.footprint()?, self.width)
    }

    fn refresh_status(&mut self) {
        if let Some(surface) = &self.surface {
            self.status = format!(
                "{} images, {} selected, {} columns",
                surface.tiles().len(),
                surface.selected_count(),
                surface.columns()
            );
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let toolbar = row![
            button("Open Folder")
                .on_press(Message::OpenFolder)
                .padding(10),
            button("Select All")
                .on_press(Message::SelectAll)
                .padding(10),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .align_y(alignment::Vertical::Center);

        let body: Element<Message> = match &self.surface {
            Some(surface) => scrollable(ui::grid::view(surface))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => container(text("No folder open").size(24))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        column![toolbar, body]
            .spacing(10)
            .padding(PADDING)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Grid width for a window of `window_width` logical pixels
fn available_width(window_width: f32) -> u32 {
    (window_width - 2.0 * PADDING).max(0.0) as u32
}

/// Load settings and apply command line overrides
fn load_settings(args: &Args) -> Settings {
    let mut settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("⚠️  Couldn't load settings, using defaults: {}", e);
        Settings::default()
    });

    if let Some(w) = args.tile_width {
        settings.tile_width = w;
    }
    if let Some(h) = args.tile_height {
        settings.tile_height = h;
    }
    if let Some(w) = args.width {
        settings.window_width = w;
    }

    if let Err(e) = settings.footprint() {
        log::error!("❌ {}; using the default tile size", e);
        let defaults = Settings::default();
        settings.tile_width = defaults.tile_width;
        settings.tile_height = defaults.tile_height;
    }

    settings
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("stamps=info")).init();

    let args = Args::parse();
    let settings = load_settings(&args);
    let window_size = Size::new(settings.window_width as f32, settings.window_height as f32);

    log::info!(
        "🎨 Stamps starting: {}x{} tiles, {}px window",
        settings.tile_width,
        settings.tile_height,
        settings.window_width
    );

    iced::application("Stamps", Stamps::update, Stamps::view)
        .subscription(Stamps::subscription)
        .theme(Stamps::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Stamps::new(settings, args.path))
}
