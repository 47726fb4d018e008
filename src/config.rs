use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// Port the API server binds to.
    #[clap(env, long, default_value_t = 1234)]
    pub port: u16,

    /// Comma separated list of origins allowed through CORS.
    #[clap(env, long)]
    pub origin_urls: String,

    /// API key injected into outbound Google Places requests.
    #[clap(env, long)]
    pub google_api_key: String,

    /// Base URL of the Google Places API. Pointed at a local stub in tests.
    #[clap(env, long, default_value = "https://places.googleapis.com")]
    pub google_places_url: String,
}
