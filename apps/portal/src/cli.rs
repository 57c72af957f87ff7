use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hospital-portal", version, about = "Hospital scheduling portal")]
pub struct Cli {
    #[arg(long, global = true, help = "Hospital server base URL (overrides HOSPITAL_BASE_URL)")]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search doctors and print the rendered result cards
    Search {
        #[arg(long, default_value = "")]
        specialization: String,
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Book an appointment with a doctor
    Book {
        #[arg(long)]
        doctor_id: i64,
        #[arg(long, default_value = "")]
        doctor_name: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        time: String,
        #[arg(long, default_value = "")]
        symptoms: String,
    },
    /// Submit the add-doctor form
    AddDoctor {
        #[arg(long = "field", value_parser = parse_field, help = "Form field as name=value, repeatable")]
        fields: Vec<(String, String)>,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{}`", raw))?;
    if name.is_empty() {
        return Err(format!("field name is empty in `{}`", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
