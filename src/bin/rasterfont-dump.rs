use anyhow::anyhow;
use clap::{Parser, Subcommand};
use rasterfont_bin::render_settings::RenderSettings;
use rasterfont_config::{config_store, config_store_write};
use rasterfont_config::storage::JsonStorageAdapter;
use rasterfont_fontmanager::{Bitmap, FontManager, FontRegistry, Orientation, Raster};
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[clap(name = "Rasterfont-Dump", version = "0.1.0", author = "Rasterfont")]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(about = "List the available fonts")]
    List,
    #[clap(arg_required_else_help = true, about = "Rasterize a single character")]
    Char {
        #[clap(required = true)]
        char: char,
        #[clap(short = 'a', long = "art", help = "Also draw the bitmap")]
        art: bool,
    },
    #[clap(arg_required_else_help = true, about = "Rasterize a string")]
    String {
        #[clap(required = true)]
        text: String,
        #[clap(short = 'a', long = "art", help = "Also draw the bitmap")]
        art: bool,
    },
    #[clap(arg_required_else_help = true, about = "Show where a string wraps")]
    Breaks {
        #[clap(required = true)]
        text: String,
        #[clap(short = 'p', long = "pixels", help = "Pixels in a display line")]
        pixels: Option<u16>,
    },
    #[clap(about = "Show or change the render settings")]
    Config {
        #[clap(default_value = "*", help = "Keys to show, ? and * are wildcards")]
        pattern: String,
        #[clap(short = 's', long = "set", value_name = "KEY=VALUE", help = "Change a setting")]
        set: Option<String>,
        #[clap(long = "reset", help = "Put all settings back to their defaults")]
        reset: bool,
    },
}

#[derive(Debug, Parser)]
struct GlobalOpts {
    #[clap(short = 'f', long = "font", global = true, help = "Font index or name")]
    font: Option<String>,
    #[clap(short = 'r', long = "raster", global = true, help = "row-major (lrtb) or column-major (ptblr)")]
    raster: Option<Raster>,
    #[clap(short = 'o', long = "orientation", global = true, help = "top, right, bottom or left")]
    orientation: Option<Orientation>,
    #[clap(long = "offset", global = true, help = "Bit offset, only the sub-byte part is used")]
    offset: Option<u16>,
    #[clap(short = 'c', long = "config", global = true, help = "Json settings file")]
    config: Option<String>,
    #[clap(short = 'd', long = "debug", global = true, help = "Enable debug logging")]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.global_opts.debug {
        SimpleLogger::new().init()?;
    }

    if let Some(path) = &args.global_opts.config {
        config_store_write().set_storage(Box::new(JsonStorageAdapter::try_from(path)?));
    }

    let registry = FontRegistry::builtin();
    let settings = || apply_overrides(RenderSettings::from_store()?, &args.global_opts, &registry);

    match args.command {
        Commands::List => {
            for (index, name) in FontManager::font_list(&registry).iter().enumerate() {
                println!("{index:3}: {name}");
            }
        }
        Commands::Char { char, art } => {
            let settings = settings()?;
            let manager = settings.manager(&registry)?;
            let bitmap = manager.rasterize_char(char, settings.bit_offset)?;
            dump(&bitmap, art);
        }
        Commands::String { text, art } => {
            let settings = settings()?;
            let manager = settings.manager(&registry)?;
            let size = manager.measure_string(&text);
            println!("{} ({}): {size}", manager.font_name(), manager.orientation());

            let bitmap = manager.rasterize(&text, settings.bit_offset)?;
            dump(&bitmap, art);
        }
        Commands::Breaks { text, pixels } => {
            let settings = settings()?;
            let manager = settings.manager(&registry)?;
            let pixels = pixels.unwrap_or(settings.line_pixels);

            println!("breaks: {:?}", manager.character_breaks(&text, pixels));
            for line in manager.split_lines(&text, pixels) {
                println!("| {line}");
            }
        }
        Commands::Config { pattern, set, reset } => {
            if reset {
                config_store().reset();
            }
            if let Some(assignment) = set {
                let (key, value) = assignment
                    .split_once('=')
                    .ok_or_else(|| anyhow!("expected KEY=VALUE, got {assignment}"))?;
                config_store().set_from_str(key.trim(), value.trim())?;
            }
            show_config(&pattern);
        }
    }

    Ok(())
}

/// Command line flags win over the values from the config store
fn apply_overrides(
    mut settings: RenderSettings,
    opts: &GlobalOpts,
    registry: &FontRegistry,
) -> anyhow::Result<RenderSettings> {
    if let Some(font) = &opts.font {
        settings.font_index = match font.parse::<usize>() {
            Ok(index) => index,
            Err(_) => registry
                .position(font)
                .ok_or_else(|| anyhow!("unknown font: {font}"))?,
        };
    }
    if let Some(raster) = opts.raster {
        settings.raster = raster;
    }
    if let Some(orientation) = opts.orientation {
        settings.orientation = orientation;
    }
    if let Some(offset) = opts.offset {
        settings.bit_offset = offset;
    }

    Ok(settings)
}

fn show_config(pattern: &str) {
    let store = config_store();
    for key in store.find(pattern) {
        let (Some(info), Some(value)) = (store.get_info(&key), store.get(&key)) else {
            continue;
        };
        println!(
            "{key:24} {:14} (default {:12}) {}",
            value.value(),
            info.default.value(),
            info.description
        );
    }
}

fn dump(bitmap: &Bitmap, art: bool) {
    println!(
        "{} {}x{} px, {} bytes ({} per row, {} per column)",
        bitmap.raster,
        bitmap.width_pixels,
        bitmap.height_pixels,
        bitmap.len(),
        bitmap.bytes_per_row,
        bitmap.bytes_per_column
    );

    let row_len = usize::from(bitmap.bytes_per_row).max(1);
    for row in bitmap.data().chunks(row_len) {
        let line: String = row.iter().map(|byte| format!("0x{byte:02x} ")).collect();
        println!("{}", line.trim_end());
    }

    if art {
        println!();
        print!("{bitmap}");
    }
}
