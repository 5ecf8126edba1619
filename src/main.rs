use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod constants;
mod error;
mod events;
mod input;
mod layout;
mod notification;
mod slide;
mod slider;
mod state;
mod storefront;
mod texture_loader;
mod timer;

use crate::constants::*;
use crate::events::{EventRouter, KeyScope};
use crate::input::InputPoller;
use crate::layout::SliderLayout;
use crate::notification::{ConsoleNotifier, NoticeKind, NotificationBanner, Notifier};
use crate::slide::{HeroSlide, Indicator, Slide};
use crate::slider::SliderController;
use crate::state::SliderState;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::timer::FrameScheduler;

#[derive(Parser)]
#[command(name = "hero-slider", version, about = "Storefront hero slider and shop helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a window rotating through the images of a directory
    Show {
        /// Directory holding the slide images
        dir: PathBuf,
        /// Delay between automatic advances
        #[arg(long, default_value_t = AUTO_PLAY_DELAY_MS, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: u64,
        /// Where the arrow keys navigate the slider
        #[arg(long, value_enum, default_value_t = KeyScope::Page)]
        key_scope: KeyScope,
        /// Show slides in random order instead of by file name
        #[arg(long)]
        shuffle: bool,
    },
    /// Check an email address
    ValidateEmail { email: String },
    /// Format a price with two decimals
    FormatPrice {
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Cart placeholders
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Search products
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Filter products by category slug
    Filter { category: String },
}

#[derive(Subcommand)]
enum CartAction {
    Add {
        product_id: u64,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
    Remove { cart_item_id: u64 },
    Update { cart_item_id: u64, quantity: u32 },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut console = ConsoleNotifier;

    match cli.command {
        Command::Show { dir, interval_ms, key_scope, shuffle } => {
            run_slider(&dir, Duration::from_millis(interval_ms), key_scope, shuffle)?;
        }
        Command::ValidateEmail { email } => {
            if storefront::validate_email(&email) {
                println!("valid");
            } else {
                println!("invalid");
                process::exit(1);
            }
        }
        Command::FormatPrice { price } => println!("{}", storefront::format_price(price)),
        Command::Cart { action } => match action {
            CartAction::Add { product_id, quantity } => {
                storefront::add_to_cart(&mut console, product_id, quantity)
            }
            CartAction::Remove { cart_item_id } => storefront::remove_from_cart(&mut console, cart_item_id),
            CartAction::Update { cart_item_id, quantity } => {
                storefront::update_cart_quantity(&mut console, cart_item_id, quantity)
            }
        },
        Command::Search { query } => {
            if !storefront::search_products(&mut console, &query) {
                process::exit(1);
            }
        }
        Command::Filter { category } => storefront::filter_by_category(&mut console, &category),
    }
    Ok(())
}

fn run_slider(dir: &Path, interval: Duration, key_scope: KeyScope, shuffle: bool) -> Result<()> {
    // Fail before opening a window when there is nothing to show
    let mut image_paths = load_sorted_image_paths(dir)?;
    if shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(dir = %dir.display(), images = image_paths.len(), "hero slider page loaded");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Hero Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut banner = NotificationBanner::new();

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(HeroSlide::new(texture)),
            Err(error) => {
                warn!(%error, "skipping slide");
                let name = path.file_name().map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                banner.notify(&format!("Skipped {name}"), NoticeKind::Warning);
            }
        }
    }

    let indicators = vec![Indicator::default(); slides.len()];
    let mut router = EventRouter::new();
    let mut slider = SliderController::initialize(
        slides,
        indicators,
        interval,
        FrameScheduler::new(),
        &mut router,
        key_scope,
    );
    if slider.state() == SliderState::Inert {
        banner.notify("No slides could be loaded", NoticeKind::Error);
    }

    let mut poller = InputPoller::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let elapsed = Duration::from_secs_f32(dt);

        let screen_width = rl.get_screen_width() as f32;
        let screen = Rectangle::new(0.0, 0.0, screen_width, rl.get_screen_height() as f32);
        let layout = SliderLayout::compute(screen, slider.indicators().len());

        // --- Input ---
        let click_taken = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
            && banner.click(screen_width, rl.get_mouse_position());
        for event in poller.poll(&rl, &layout, click_taken) {
            if let Some(event) = router.route(event) {
                slider.handle(event);
            }
        }

        // --- Update ---
        slider.tick(elapsed);
        for slide in slider.slides_mut() {
            slide.update(dt);
        }
        banner.update(elapsed);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        // Outgoing slides first so the active one fades in on top
        for slide in slider.slides().iter().filter(|s| !s.is_active()) {
            slide.draw(&mut d, layout.area);
        }
        for slide in slider.slides().iter().filter(|s| s.is_active()) {
            slide.draw(&mut d, layout.area);
        }

        if slider.state().is_live() {
            layout.draw_controls(&mut d, slider.indicators());
        }
        banner.draw(&mut d);
    }

    info!(
        timer_active = slider.timer_active(),
        pending_timers = slider.pending_timers(),
        "closing hero slider"
    );
    slider.dispose(&mut router);
    Ok(())
}
