use clap::{Parser, Subcommand, ValueEnum};
use qr_bitstream::encoder::tables;
use qr_bitstream::{
    CapacityTarget, EcLevel, EncodeOptions, EncodeRequest, Mode, Payload, Version, encode_detailed,
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "qr_bitstream developer tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum PayloadKind {
    /// Numeric when the data is a plain decimal number, text otherwise
    Auto,
    /// Always encode as text
    Text,
}

#[derive(Subcommand)]
enum Command {
    /// Print the padded bit stream for some data
    Encode {
        data: String,
        #[arg(long, default_value_t = 1)]
        version: u8,
        #[arg(long, default_value = "L")]
        level: String,
        #[arg(long, value_enum, default_value_t = PayloadKind::Auto)]
        kind: PayloadKind,
        /// Padding target: `nibbles` or `data-bits`
        #[arg(long)]
        target: Option<String>,
        /// Print the capacity target and codewords to stderr
        #[arg(long)]
        verbose: bool,
    },
    /// Print count indicator widths and error correction parameters for a version
    Tables {
        #[arg(long)]
        version: u8,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            data,
            version,
            level,
            kind,
            target,
            verbose,
        } => encode_cmd(&data, version, &level, kind, target.as_deref(), verbose),
        Command::Tables { version } => tables_cmd(version),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn debug_enabled(verbose: bool) -> bool {
    verbose || std::env::var("QR_DEBUG").is_ok()
}

fn encode_cmd(
    data: &str,
    version: u8,
    level: &str,
    kind: PayloadKind,
    target: Option<&str>,
    verbose: bool,
) -> Result<(), String> {
    let version = Version::new(version).map_err(|e| e.to_string())?;
    let payload = match kind {
        PayloadKind::Auto => Payload::classify(data),
        PayloadKind::Text => Payload::from(data),
    };
    let mut options = EncodeOptions::default();
    if let Some(name) = target {
        let target = CapacityTarget::from_name(name)
            .ok_or_else(|| format!("unknown capacity target {name:?}"))?;
        options = options.with_capacity_target(target);
    }

    let request = EncodeRequest::new(payload)
        .with_version(version)
        .with_ec_level(EcLevel::from_code(level));
    let encoded = encode_detailed(&request, options).map_err(|e| e.to_string())?;

    println!("{}", encoded.bits());

    if debug_enabled(verbose) {
        eprintln!(
            "mode={} version={} level={} bits={} capacity_target={} ({})",
            encoded.mode(),
            encoded.version(),
            encoded.ec_level(),
            encoded.bits().len(),
            encoded.capacity_target_bits(),
            options.capacity_target.name()
        );
        let hex: Vec<String> = encoded
            .codewords()
            .iter()
            .map(|c| format!("{c:02X}"))
            .collect();
        eprintln!("codewords: {}", hex.join(" "));
    }
    Ok(())
}

fn tables_cmd(version: u8) -> Result<(), String> {
    let version = Version::new(version).map_err(|e| e.to_string())?;
    println!("Version {} ({}x{} modules)", version, version.size(), version.size());

    for mode in [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji] {
        let indicator = tables::mode_indicator(mode).map_err(|e| e.to_string())?;
        let width = tables::char_count_bits(mode, version).map_err(|e| e.to_string())?;
        println!("  {mode:<12} indicator={indicator:04b} count_bits={width}");
    }

    for level in EcLevel::ALL {
        let info = tables::ec_info(version, level);
        println!(
            "  {level}: total={} data={} ec_per_block={} blocks={}",
            info.total_codewords, info.data_codewords, info.ec_codewords_per_block, info.num_blocks
        );
    }
    Ok(())
}
