use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use bridgeprims::codec::{self, CodecError};
use bridgeprims::config::{CliConfig, DEFAULT_CONFIG_FILE};
use bridgeprims::merkle;

#[derive(Parser)]
#[command(name = "bridgeprims")]
#[command(about = "Merkle node hashing and varint encoding for header bridging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, help = "Config file path")]
    pub config: Option<String>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Leaf hash of hex-encoded bytes
    Leaf { value: String },
    /// Inner-node hash of two hex-encoded children
    Inner { left: String, right: String },
    /// Varint-encode a decimal integer
    Encode {
        #[arg(long)]
        signed: bool,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode a hex varint
    Decode {
        #[arg(long)]
        signed: bool,
        value: String,
    },
    /// Length-prefix hex-encoded bytes
    EncodeBytes { value: String },
    /// Write a default config file
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

pub fn parse_unsigned(text: &str) -> Result<u64, CodecError> {
    let text = text.trim();
    if let Ok(negative) = text.parse::<i128>() {
        if negative < 0 {
            return Err(CodecError::InvalidArgument(format!(
                "unsigned varint requires a non-negative value, got {}",
                negative
            )));
        }
    }
    text.parse::<u64>().map_err(|e| {
        CodecError::InvalidArgument(format!("{:?} is not a u64: {}", text, e))
    })
}

pub fn parse_signed(text: &str) -> Result<i64, CodecError> {
    let text = text.trim();
    text.parse::<i64>().map_err(|e| {
        CodecError::InvalidArgument(format!("{:?} is not an i64: {}", text, e))
    })
}

fn parse_hex(text: &str) -> Result<Vec<u8>, CodecError> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    Ok(hex::decode(text)?)
}

/// Run one command and return the text to print on stdout
pub fn execute(command: Commands, config: &CliConfig, json_output: bool) -> Result<String> {
    let output = match command {
        Commands::Leaf { value } => {
            let bytes = parse_hex(&value)?;
            let hash = merkle::merkle_leaf_hash(&bytes);
            info!("leaf hash over {} bytes", bytes.len());
            render(config, json_output, "leaf", hash.as_ref(), json!({}))
        }
        Commands::Inner { left, right } => {
            let left = parse_hex(&left)?;
            let right = parse_hex(&right)?;
            let hash = merkle::merkle_inner_hash(&left, &right);
            info!("inner hash over {} + {} bytes", left.len(), right.len());
            render(config, json_output, "inner", hash.as_ref(), json!({}))
        }
        Commands::Encode { signed, value } => {
            let encoded = if signed {
                codec::encode_varint_signed(parse_signed(&value)?)
            } else {
                codec::encode_varint_unsigned(parse_unsigned(&value)?)
            };
            render(config, json_output, "encode", &encoded, json!({
                "signed": signed,
                "length": encoded.len(),
            }))
        }
        Commands::Decode { signed, value } => {
            let bytes = parse_hex(&value)?;
            let (decoded, consumed) = if signed {
                let (v, n) = codec::decode_varint_signed(&bytes)?;
                (v.to_string(), n)
            } else {
                let (v, n) = codec::decode_varint_unsigned(&bytes)?;
                (v.to_string(), n)
            };
            if consumed < bytes.len() {
                tracing::warn!("{} trailing bytes ignored", bytes.len() - consumed);
            }
            if json_output {
                json!({
                    "command": "decode",
                    "signed": signed,
                    "value": decoded,
                    "consumed": consumed,
                })
                .to_string()
            } else {
                decoded
            }
        }
        Commands::EncodeBytes { value } => {
            let bytes = parse_hex(&value)?;
            let encoded = codec::encode_length_prefixed(&bytes);
            render(config, json_output, "encode-bytes", &encoded, json!({
                "length": bytes.len(),
            }))
        }
        Commands::GenerateConfig { output } => {
            CliConfig::default().save(&output)?;
            if json_output {
                json!({"command": "generate-config", "path": output}).to_string()
            } else {
                format!("Config written to {}", output)
            }
        }
    };
    Ok(output)
}

fn render(
    config: &CliConfig,
    json_output: bool,
    command: &str,
    bytes: &[u8],
    mut extra: serde_json::Value,
) -> String {
    let hex = config.render_hex(bytes);
    if !json_output {
        return hex;
    }
    if let Some(map) = extra.as_object_mut() {
        map.insert("command".to_string(), json!(command));
        map.insert("hex".to_string(), json!(hex));
    }
    extra.to_string()
}
