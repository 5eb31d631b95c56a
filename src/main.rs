use bindexpr::{
    evaluate_arithmetic, evaluate_condition, resolve_for_type, BindexprError, TargetType,
    VariableLoader, VariableStore,
};
use clap::{Parser, Subcommand};
use dotenv::dotenv;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a raw value for a variable type
    Resolve {
        /// Variable type: BOOLEAN, INT, LONG, FLOAT, DOUBLE or STRING
        #[arg(short = 't', long = "type")]
        target: TargetType,

        /// The raw value
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Evaluate a condition such as `1 <= 2`
    Condition {
        /// The condition text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Evaluate an arithmetic triple such as `3 + 1`
    Arithmetic {
        /// The arithmetic text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Change a variable declared in a YAML schema
    Change {
        /// Path to the variable schema file
        #[arg(short, long)]
        file: String,

        /// Name of the variable to change
        #[arg(short, long)]
        key: String,

        /// New raw value, may contain `{name}` placeholders
        #[arg(short, long, allow_hyphen_values = true)]
        value: String,
    },
}

fn main() -> Result<(), BindexprError> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Resolve { target, text } => {
            println!("{}", resolve_for_type(&text, target));
        }
        Commands::Condition { text } => {
            let result = evaluate_condition(&text)?;
            println!("{}", result);
        }
        Commands::Arithmetic { text } => match evaluate_arithmetic(&text) {
            Some(value) => println!("{}", value),
            None => return Err(BindexprError::NotArithmetic(text)),
        },
        Commands::Change { file, key, value } => {
            let schema = VariableLoader::new().load_schema(&file)?;
            let mut store = VariableStore::new(&schema);
            log::info!("Loaded {} variables from {}", store.len(), file);

            let resolved = store.change_variable(&key, &value)?;
            println!("{} = {}", key, resolved);
            println!("{}", serde_json::to_string_pretty(&store.to_json())?);
        }
    }

    Ok(())
}
