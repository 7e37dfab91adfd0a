use std::env;

use clap::{Parser, Subcommand};
use titrage_core::language::TitleCaser;
use titrage_core::preprocess::{DefaultPreprocessor, Preprocessor};
use titrage_geocode::{AddressQuery, Geocoder};
use titrage_lang_french::geocoder::BAN_ENDPOINT;
use titrage_lang_french::{BanGeocoder, FrenchLexicon, FrenchTitleCaser};

#[derive(Parser)]
#[command(name = "titrage", about = "French title casing and address lookup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Title-case a French string
    Title {
        text: String,

        /// Extra function words to keep lower-case, comma separated
        #[arg(long)]
        add_words: Option<String>,

        /// Function words to drop from the lexicon, comma separated
        #[arg(long)]
        remove_words: Option<String>,

        /// Accented capitals to keep instead of folding, e.g. "É,À"
        #[arg(long)]
        keep_accents: Option<String>,
    },
    /// Geocode an address against the BAN
    Geocode {
        address: String,

        #[arg(long)]
        zip: Option<String>,

        #[arg(long)]
        city: Option<String>,

        /// Only print the best match
        #[arg(long)]
        first: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Title {
            text,
            add_words,
            remove_words,
            keep_accents,
        } => {
            let caser = build_caser(add_words, remove_words, keep_accents);
            let text = DefaultPreprocessor.process(&text);
            println!("{}", caser.title(&text));
        }
        Command::Geocode {
            address,
            zip,
            city,
            first,
        } => {
            let endpoint = env::var("BAN_ENDPOINT").unwrap_or_else(|_| BAN_ENDPOINT.to_string());
            let geocoder = BanGeocoder::with_endpoint(endpoint);
            tracing::debug!(provider = %geocoder.metadata().name, "geocoding");

            let query = if zip.is_some() || city.is_some() {
                AddressQuery::Parts {
                    address: Some(address),
                    zip,
                    city,
                }
            } else {
                AddressQuery::FullText(address)
            };

            if first {
                match geocoder.lookup_first(&query).await? {
                    Some(hit) => print_hit(&hit),
                    None => println!("no result"),
                }
            } else {
                let hits = geocoder.lookup(&query).await?;
                if hits.is_empty() {
                    println!("no result");
                }
                for hit in &hits {
                    print_hit(hit);
                }
            }
        }
    }

    Ok(())
}

fn build_caser(
    add_words: Option<String>,
    remove_words: Option<String>,
    keep_accents: Option<String>,
) -> FrenchTitleCaser {
    let mut lexicon = FrenchLexicon::with_defaults();

    if let Some(words) = add_words {
        lexicon.add_function_words(words.split(',').map(|w| w.trim().to_string()));
    }
    if let Some(words) = remove_words {
        let words: Vec<String> = words.split(',').map(|w| w.trim().to_string()).collect();
        lexicon.remove_function_words(words.iter().map(String::as_str));
    }
    if let Some(letters) = keep_accents {
        lexicon.keep_diacritics(letters.split(',').filter_map(|l| l.trim().chars().next()));
    }

    FrenchTitleCaser::with_lexicon(lexicon)
}

fn print_hit(hit: &titrage_geocode::Coordinates) {
    println!(
        "{}\t{}\t{}",
        hit.full_address, hit.latitude, hit.longitude
    );
}
