use album_tree::{config, manifest, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shared flags for commands that read an album tree.
#[derive(clap::Args, Clone)]
struct TreeArgs {
    /// JSON album tree written by the file scanner
    #[arg(long, default_value = "tree.json")]
    input: PathBuf,

    /// Directory containing config.toml (stock defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "album-tree")]
#[command(about = "Finalize photo gallery album trees")]
#[command(long_about = "\
Finalize photo gallery album trees

Reads the raw album tree produced by a file scanner, assigns output paths
and URLs, aggregates photo/video counts and date ranges, sorts media and
albums, and picks preview thumbnails for every album.

Input tree (JSON):

  {
    \"title\": \"Home\",
    \"files\": [ { \"type\": \"image\", \"filename\": \"cover.jpg\", ... } ],
    \"albums\": [ { \"title\": \"Japan\", \"files\": [...], \"albums\": [...] } ]
  }

Run 'album-tree gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Show debug logging for every finalized album
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Finalize the album tree and write the output manifest
    Finalize {
        #[command(flatten)]
        tree: TreeArgs,

        /// Output manifest path
        #[arg(long = "output", default_value = "albums.json")]
        output_path: PathBuf,
    },
    /// Finalize the album tree and print it without writing anything
    Check(TreeArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Finalize { tree, output_path } => {
            let (site_config, album) =
                manifest::finalize_manifest(&tree.input, tree.config.as_deref())?;
            manifest::write_output(&output_path, &site_config, &album)?;
            output::print_tree_output(&album);
            println!("==> Wrote {}", output_path.display());
        }
        Command::Check(tree) => {
            let (_, album) = manifest::finalize_manifest(&tree.input, tree.config.as_deref())?;
            output::print_tree_output(&album);
            println!("==> Album tree is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.init();
}
