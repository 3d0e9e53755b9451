use std::str::FromStr;

use nalgebra::{Scalar, Vector4};

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

/// Push a vector across the native boundary and lay out mesh segments over an index buffer,
/// reporting what happens to each.
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,sceneglue=info,probe=info",
        env = "PROBE_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Vector to convert to the native representation and back
    #[arg(short, long, default_value = "0,0,0,1", value_parser = parse_vec4::<f32>, value_name = "X,Y,Z,W")]
    pub vector: Vector4<f32>,
    /// Length of the index buffer shared by all segments
    #[arg(short, long, default_value_t = 200)]
    pub buffer_len: u32,
    /// Number of indices in each segment, laid out consecutively from offset 0
    #[arg(short, long, value_delimiter = ',', default_value = "120,36,44")]
    pub counts: Vec<u32>,
}

fn parse_vec4<R: FromStr + Scalar>(
    s: &str,
) -> Result<Vector4<R>, Box<dyn std::error::Error + Send + Sync + 'static>>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let mut split = s.trim().split(',');
    let mut next = || -> Result<R, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let part = split.next().ok_or("expected four comma-separated components")?;
        Ok(R::from_str(part.trim())?)
    };
    let (x, y, z, w) = (next()?, next()?, next()?, next()?);
    if split.next().is_some() {
        return Err("expected exactly four components".into());
    }
    Ok(nalgebra::vector![x, y, z, w])
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
