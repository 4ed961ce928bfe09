use std::path::PathBuf;

use clap::ValueHint;
use meshdata::IndexType;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Index width of the generated demo mesh
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum IndexWidth {
    U8,
    U16,
    U32,
}

impl std::fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexWidth::U8 => f.write_str("u8"),
            IndexWidth::U16 => f.write_str("u16"),
            IndexWidth::U32 => f.write_str("u32"),
        }
    }
}

impl From<IndexWidth> for IndexType {
    fn from(value: IndexWidth) -> Self {
        match value {
            IndexWidth::U8 => IndexType::UnsignedByte,
            IndexWidth::U16 => IndexType::UnsignedShort,
            IndexWidth::U32 => IndexType::UnsignedInt,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,meshdata=info,meshinfo=info",
        env = "MESHINFO_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Number of quads along each side of the generated demo grid
    #[arg(short, long, default_value_t = 4)]
    pub grid: u32,
    /// Index width of the generated demo grid
    #[arg(short, long, default_value_t = IndexWidth::U16)]
    pub index_type: IndexWidth,
    /// Raw file of packed, native-endian f32 XYZ triples, to be memory-mapped and inspected
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub positions: Option<PathBuf>,
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
