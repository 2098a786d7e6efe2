use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser, ValueEnum};
use zeroize::Zeroizing;

use shamir_keys::config::{ShareEncoding, SharingConfig};
use shamir_keys::core::wipe::SecretInt;
use shamir_keys::entropy::sources::platform_source;
use shamir_keys::entropy::DEFAULT_DEVICE;
use shamir_keys::format::{parse_hex, parse_literal, secret_to_hex};
use shamir_keys::rng::RandomState;
use shamir_keys::sharing::{
    validate_threshold, IntegerShamir, SecretSharingScheme, Share, MIN_KEYS_REQ,
};

/// Split a secret into threshold shares, or recover it from them.
///
/// The characters -- may be used to terminate option parsing; anything after is an
/// ARGUMENT (needed for negative secrets).
#[derive(Parser, Debug)]
#[command(name = "shamir", version)]
#[command(group(ArgGroup::new("operation").required(true).args(["generate", "decrypt"])))]
#[command(group(ArgGroup::new("input").args(["file", "string"])))]
struct Cli {
    /// Generate N_KEYS shares of the secret ARGUMENT, any KEYS_REQ of which recover it
    #[arg(
        short = 'g',
        long = "generate",
        value_name = "KEYS_REQ,N_KEYS",
        value_parser = parse_genkeys
    )]
    generate: Option<GenKeys>,

    /// Recover the secret from the N_KEYS shares given as ARGUMENTs
    #[arg(short = 'd', long = "decrypt", value_name = "N_KEYS", value_parser = parse_decrypt)]
    decrypt: Option<usize>,

    /// Read input from the file(s) named by ARGUMENT
    #[arg(short = 'f', long = "file")]
    file: bool,

    /// Take input from ARGUMENT as a string (default)
    #[arg(short = 's', long = "string")]
    string: bool,

    /// How generated shares are printed
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Base62)]
    format: OutputFormat,

    /// Random device used to seed share generation
    #[arg(long = "device", value_name = "PATH", default_value = DEFAULT_DEVICE)]
    device: String,

    /// The secret (with -g) or the shares (with -d)
    #[arg(value_name = "ARGUMENT", required = true)]
    arguments: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
struct GenKeys {
    keys_req: usize,
    n_keys: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// x,y in base 62; can be fed back to -d
    Base62,
    /// x=..., y=... in decimal; for inspection only
    Labeled,
}

impl From<OutputFormat> for ShareEncoding {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Base62 => ShareEncoding::Base62,
            OutputFormat::Labeled => ShareEncoding::Labeled,
        }
    }
}

fn parse_count(text: &str, what: &str) -> Result<usize, String> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| format!("{} ({}) does not seem to be a valid number", what, text))
}

fn parse_genkeys(arg: &str) -> Result<GenKeys, String> {
    let (req, n) = arg.split_once(',').ok_or_else(|| {
        String::from("you must specify two numbers, separated by a comma: KEYS_REQ,N_KEYS")
    })?;
    let keys_req = parse_count(req, "KEYS_REQ")?;
    let n_keys = parse_count(n, "N_KEYS")?;
    validate_threshold(keys_req, n_keys).map_err(|e| e.to_string())?;
    Ok(GenKeys { keys_req, n_keys })
}

fn parse_decrypt(arg: &str) -> Result<usize, String> {
    let n = parse_count(arg, "N_KEYS")?;
    if n < MIN_KEYS_REQ {
        return Err(format!("N_KEYS ({}) must not be less than {}", n, MIN_KEYS_REQ));
    }
    Ok(n)
}

fn read_input(arg: &str, from_file: bool) -> Result<Zeroizing<String>> {
    if from_file {
        let text = fs::read_to_string(Path::new(arg))
            .with_context(|| format!("failed to read {}", arg))?;
        Ok(Zeroizing::new(text))
    } else {
        Ok(Zeroizing::new(arg.to_owned()))
    }
}

fn read_secret(arg: &str, from_file: bool) -> Result<SecretInt> {
    let secret = if from_file {
        let bytes = fs::read(arg).with_context(|| format!("failed to read {}", arg))?;
        let bytes = Zeroizing::new(bytes);
        let dump = Zeroizing::new(hex::encode(bytes.as_slice()));
        parse_hex(&dump).with_context(|| format!("{} holds no secret", arg))?
    } else {
        parse_literal(arg).context("the secret is not a valid number")?
    };
    Ok(SecretInt::new(secret))
}

fn run_generate(cli: &Cli, gen: GenKeys, config: SharingConfig) -> Result<()> {
    let secret = read_secret(&cli.arguments[0], cli.file)?;

    let mut source = platform_source(&config.entropy_device);
    let mut state = RandomState::init(source.as_mut()).context("failed to seed the random state")?;
    let scheme = IntegerShamir::new(config);
    let shares = scheme.split(&secret, gen.keys_req, gen.n_keys, &mut state)?;
    state.teardown();

    log::info!("split secret into {} shares, threshold {}", gen.n_keys, gen.keys_req);

    let config = scheme.config();
    let mut out = io::stdout().lock();
    for share in &shares {
        writeln!(out, "{}", share.to_text(config.share_encoding, config.delimiter))?;
    }
    Ok(())
}

fn run_decrypt(cli: &Cli, n_keys: usize, config: SharingConfig) -> Result<()> {
    let mut shares = Vec::with_capacity(n_keys);
    for (i, arg) in cli.arguments.iter().enumerate() {
        let text = read_input(arg, cli.file)?;
        let share = Share::parse(&text, config.delimiter)
            .with_context(|| format!("share {} is malformed", i + 1))?;
        shares.push(share);
    }

    let scheme = IntegerShamir::new(config);
    let secret = SecretInt::new(scheme.reconstruct(&shares, n_keys)?);
    log::info!("recovered secret from {} shares", shares.len());

    println!("{}", secret_to_hex(&secret));
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = SharingConfig {
        share_encoding: cli.format.into(),
        entropy_device: cli.device.clone(),
        ..SharingConfig::default()
    };
    log::debug!(
        "input from {}, {} argument(s)",
        if cli.file {
            "file"
        } else if cli.string {
            "string"
        } else {
            "string (default)"
        },
        cli.arguments.len()
    );

    if let Some(gen) = cli.generate {
        if cli.arguments.len() != 1 {
            Cli::command()
                .error(ErrorKind::TooManyValues, "-g needs exactly one argument (the secret)")
                .exit();
        }
        run_generate(&cli, gen, config)
    } else if let Some(n_keys) = cli.decrypt {
        if cli.arguments.len() != n_keys {
            let msg = format!(
                "-d: argument number mismatch. Expected {}, got {}",
                n_keys,
                cli.arguments.len()
            );
            Cli::command().error(ErrorKind::WrongNumberOfValues, msg).exit();
        }
        run_decrypt(&cli, n_keys, config)
    } else {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "you must specify an operation (-g or -d)")
            .exit()
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
