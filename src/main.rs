use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

use example::{surface, Value};

/// Call the week 1 binding functions from the command line
#[derive(Parser)]
#[command(name = "week1")]
#[command(about = "Inspect and invoke the functions exposed by the example module", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every module and the functions it exposes
    List {
        /// Print the surface as JSON
        #[arg(long)]
        json: bool,
    },
    /// Call a function by name
    Call {
        /// Module name (day1 or day2)
        module: String,
        /// Function name within the module
        function: String,
        /// Positional arguments as JSON literals; anything else is passed as text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("week1 started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::List { json } => run_list(json),
        Commands::Call {
            module,
            function,
            args,
        } => run_call(&module, &function, &args),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_list(json: bool) -> anyhow::Result<()> {
    let modules = surface::modules();
    if json {
        let out = serde_json::to_string_pretty(&modules).context("failed to encode surface")?;
        println!("{out}");
        return Ok(());
    }

    for module in modules {
        println!("{} - {}", module.name, module.doc);
        for function in module.functions {
            match function.doc {
                Some(doc) => println!("  {}  # {}", function.signature(), doc),
                None => println!("  {}", function.signature()),
            }
        }
    }
    Ok(())
}

fn run_call(module: &str, function: &str, raw: &[String]) -> anyhow::Result<()> {
    let spec = surface::lookup(module, function)?;
    let args = raw
        .iter()
        .enumerate()
        .map(|(idx, arg)| {
            let expected = spec.params.get(idx).map(|p| p.kind);
            Value::parse_arg(arg, expected).with_context(|| format!("invalid argument '{arg}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    debug!(module, function, argc = args.len(), "calling from the command line");
    let result = spec.call(args)?;
    println!("{result}");
    Ok(())
}
