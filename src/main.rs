use clap::{Parser, Subcommand};
use sheetpress::source::{VecActorSource, load_actors};
use sheetpress::{ExportBuilder, ExportFormat, ExportRequest, Exporter, PipelineError, RasterOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Export character sheets as PDF or PNG", long_about = None)]
struct Args {
    /// Extra directory of template JSON files, registered after the built-ins
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered templates and the formats they export
    Templates,

    /// Print the resolved layout of the first actor as JSON
    Resolve {
        template: String,
        actors: PathBuf,
    },

    /// Export every actor in a JSON file
    Export {
        template: String,
        actors: PathBuf,
        /// pdf or png
        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Directory image sources are resolved against
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Overrides the PNG pixel ratio
        #[arg(long)]
        pixel_ratio: Option<f32>,
        /// Extra font directory for PNG text
        #[arg(long)]
        fonts: Option<PathBuf>,
    },
}

fn exporter(args: &Args, assets: Option<&PathBuf>, fonts: Option<&PathBuf>) -> Result<Exporter, PipelineError> {
    let mut builder = ExportBuilder::new()
        .with_builtin_templates()?
        .with_raster_options(RasterOptions::default())
        .with_system_fonts(true);
    if let Some(dir) = &args.templates {
        builder = builder.with_template_dir(dir)?;
    }
    if let Some(dir) = assets {
        builder = builder.with_resource_dir(dir);
    }
    if let Some(dir) = fonts {
        builder = builder.with_font_dir(dir);
    }
    builder.build()
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("sheetpress=info")).init();

    let args = Args::parse();
    match &args.command {
        Command::Templates => {
            let exporter = exporter(&args, None, None)?;
            for template in exporter.registry().iter() {
                let formats: Vec<String> = template.meta.exports.iter().map(ToString::to_string).collect();
                println!(
                    "{:<20} {:>6.1} x {:<6.1} mm  [{}]  {}",
                    template.meta.id,
                    template.meta.width,
                    template.meta.height,
                    formats.join(", "),
                    template.meta.name
                );
            }
        }
        Command::Resolve { template, actors } => {
            let exporter = exporter(&args, None, None)?;
            let actor = load_actors(actors)?
                .into_iter()
                .next()
                .ok_or_else(|| PipelineError::Config(format!("{} holds no actors", actors.display())))?;
            let layout = exporter.resolve_actor(template, &actor)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::Export {
            template,
            actors,
            format,
            out_dir,
            assets,
            pixel_ratio,
            fonts,
        } => {
            let exporter = exporter(&args, assets.as_ref(), fonts.as_ref())?;
            let mut request = ExportRequest::new(template.clone(), *format);
            if let Some(ratio) = pixel_ratio {
                request = request.with_pixel_ratio(*ratio);
            }

            std::fs::create_dir_all(out_dir)?;
            let mut source = VecActorSource::new(load_actors(actors)?);
            let count = exporter.export_all(
                &mut source,
                &request,
                |artifact| {
                    let path = artifact.write_to_dir(out_dir)?;
                    println!("{}", path.display());
                    Ok(())
                },
                || true,
            )?;
            log::info!("Exported {} artifact(s) to {}", count, out_dir.display());
        }
    }
    Ok(())
}
