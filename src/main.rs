//! Equicube CLI - equirectangular panorama to cube-map converter.
//!
//! Splits a 2:1 panorama into six square faces written as
//! `Back`, `Left`, `Front`, `Right`, `Top` and `Bottom` image files.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use equicube::export::{FaceDirectoryWriter, FaceExportOptions, FaceFormat, load_equirect};
use equicube::projection::{ConvertOptions, Converter, face_edge};

/// Equirectangular panorama to cube-map converter.
#[derive(Parser)]
#[command(name = "equicube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a panorama into six cube faces.
    Convert {
        /// Equirectangular input image (2:1 aspect ratio).
        #[arg(short, long, default_value = "Input/equi00.jpg")]
        input: PathBuf,

        /// Output directory for the face images.
        #[arg(short, long, default_value = "Output")]
        output: PathBuf,

        /// Face image format.
        #[arg(short, long, default_value = "jpeg")]
        format: OutputFormat,

        /// JPEG quality (1-100).
        #[arg(short, long, default_value = "75")]
        quality: u8,

        /// Render faces one at a time instead of concurrently.
        #[arg(long)]
        sequential: bool,
    },
    /// Show face size and memory estimates for a panorama size.
    Info {
        /// Panorama width in pixels.
        #[arg(short, long)]
        width: u32,

        /// Panorama height in pixels (defaults to width / 2).
        #[arg(long)]
        height: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Baseline JPEG (`.jpg`).
    Jpeg,
    /// Lossless 8-bit PNG (`.png`).
    Png,
}

impl From<OutputFormat> for FaceFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Jpeg => FaceFormat::Jpeg,
            OutputFormat::Png => FaceFormat::Png,
        }
    }
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            quality,
            sequential,
        } => run_convert(input, output, format, quality, sequential),
        Commands::Info { width, height } => run_info(width, height),
    }
}

fn run_convert(input: PathBuf, output: PathBuf, format: OutputFormat, quality: u8, sequential: bool) {
    if !(1..=100).contains(&quality) {
        eprintln!("Error: Quality must be between 1 and 100");
        std::process::exit(1);
    }

    println!("Starting");
    let start = Instant::now();

    let source = load_equirect(&input).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", input.display(), e);
        std::process::exit(1);
    });
    println!(
        "Input: {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let export_options = FaceExportOptions {
        format: format.into(),
        jpeg_quality: quality,
        ..Default::default()
    };
    let mut writer = FaceDirectoryWriter::new(&output, export_options).unwrap_or_else(|e| {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    });

    let converter = Converter::new(ConvertOptions {
        parallel: !sequential,
    });
    converter
        .convert_into_with_callbacks(
            &source,
            &mut writer,
            |face, _, _| println!("Processing {}", face),
            |_, _, _| {},
        )
        .unwrap_or_else(|e| {
            eprintln!("Error during conversion: {}", e);
            std::process::exit(1);
        });

    let edge = face_edge(source.width());
    println!(
        "  Exported {} faces ({}x{}) to {}",
        writer.written().len(),
        edge,
        edge,
        output.display()
    );
    println!("Completed in {:.2?}", start.elapsed());
    println!("End");
}

fn run_info(width: u32, height: Option<u32>) {
    let height = height.unwrap_or(width / 2);
    let edge = face_edge(width);

    let source_pixels = (width as u64) * (height as u64);
    let pixels_per_face = (edge as u64) * (edge as u64);
    let total_pixels = pixels_per_face * 6;
    let bytes_source = source_pixels * 3;
    let bytes_faces = total_pixels * 3;

    println!("Equicube - Conversion Info");
    println!("==========================");
    println!();
    println!("Source: {}x{}", width, height);
    println!("Face:   {}x{} (6 faces)", edge, edge);
    println!();
    println!("Pixel counts:");
    println!("  Per face:  {:>12} pixels", pixels_per_face);
    println!("  Total:     {:>12} pixels", total_pixels);
    println!();
    println!("Memory usage (RGB8):");
    println!("  Source:    {:>12} bytes ({:.2} MB)", bytes_source, bytes_source as f64 / 1024.0 / 1024.0);
    println!("  Faces:     {:>12} bytes ({:.2} MB)", bytes_faces, bytes_faces as f64 / 1024.0 / 1024.0);
    println!();

    if edge == 0 {
        println!("Warning: width must be at least 4 pixels to produce faces");
    }
    if width % 4 != 0 {
        println!("Note: width is not a multiple of 4; the last {} column(s) do not add to the face size", width % 4);
    }
    if height != width / 2 {
        println!("Note: height is not width / 2; faces will be stretched vertically");
    }
}
