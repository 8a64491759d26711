use serde::{Deserialize, Deserializer};
use std::num::NonZeroU32;
use std::sync::OnceLock;
use std::time::Duration;

const FLICKR_BASE_PATH: &str = "https://api.flickr.com/services/rest/";

/// Flickr allows 3600 requests per hour per key; thumbnails fan out per search
/// so the limit is kept well below that on average.
const REQUEST_PERIOD: Duration = Duration::from_millis(250);

pub const DEFAULT_PER_PAGE: u32 = 20;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub base_path: String,
    pub api_key: String,
    pub per_page: u32,
}

pub fn get_flickr_request_config(api_key: &str, per_page: u32) -> Configuration {
    Configuration {
        base_path: String::from(FLICKR_BASE_PATH),
        api_key: api_key.to_string(),
        per_page,
    }
}

static FLICKR_RATE_LIMIT_AMOUNT_CELL: OnceLock<governor::Quota> = OnceLock::new();
pub fn flickr_rate_limit_amount() -> &'static governor::Quota {
    FLICKR_RATE_LIMIT_AMOUNT_CELL.get_or_init(|| {
        governor::Quota::with_period(REQUEST_PERIOD)
            .unwrap_or_else(|| governor::Quota::per_second(NonZeroU32::MIN))
    })
}

type RateLimiter = governor::RateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

static FLICKR_RATE_LIMITER_CELL: OnceLock<RateLimiter> = OnceLock::new();
pub fn flickr_rate_limiter() -> &'static RateLimiter {
    FLICKR_RATE_LIMITER_CELL.get_or_init(|| governor::RateLimiter::direct(*flickr_rate_limit_amount()))
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("JSON deserialization error: {0} for response: {1}")]
    Serde(serde_json::Error, String),
    #[error("Flickr API error {code}: {message}")]
    Api { code: i32, message: String },
    #[error("Response has no content type")]
    NoContentType,
    #[error("Response is not an image (content type: {0})")]
    NotAnImage(String),
    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Image sizes served by the Flickr static hosts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhotoSize {
    /// 240 px on the longest side.
    Thumbnail,
    /// 1024 px on the longest side.
    Large,
}

impl PhotoSize {
    fn suffix(self) -> &'static str {
        match self {
            PhotoSize::Thumbnail => "m",
            PhotoSize::Large => "b",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FlickrPhoto {
    pub id: String,
    #[serde(default)]
    pub owner: String,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub width_m: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub height_m: Option<u32>,
}

impl FlickrPhoto {
    pub fn image_url(&self, size: PhotoSize) -> String {
        format!(
            "https://farm{}.staticflickr.com/{}/{}_{}_{}.jpg",
            self.farm,
            self.server,
            self.id,
            self.secret,
            size.suffix()
        )
    }

    /// Dimensions of the thumbnail rendition, when the search requested them.
    pub fn thumbnail_dimensions(&self) -> Option<(u32, u32)> {
        match (self.width_m, self.height_m) {
            (Some(width), Some(height)) if width > 0 && height > 0 => Some((width, height)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PhotoPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub perpage: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total: Option<u32>,
    pub photo: Vec<FlickrPhoto>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "stat")]
enum SearchEnvelope {
    #[serde(rename = "ok")]
    Ok { photos: PhotoPage },
    #[serde(rename = "fail")]
    Fail { code: i32, message: String },
}

// Flickr reports some numeric fields as strings depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    String(String),
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::String(s)) => s.parse().ok(),
        None => None,
    })
}

pub fn parse_search_response(response_text: &str) -> Result<PhotoPage, FetchError> {
    match serde_json::from_str::<SearchEnvelope>(response_text) {
        Ok(SearchEnvelope::Ok { photos }) => Ok(photos),
        Ok(SearchEnvelope::Fail { code, message }) => Err(FetchError::Api { code, message }),
        Err(e) => Err(FetchError::Serde(e, response_text.to_owned())),
    }
}

pub async fn search_photos(term: &str, config: &Configuration) -> Result<PhotoPage, FetchError> {
    tracing::info!("Searching Flickr for {:?}", term);
    flickr_rate_limiter().until_ready().await;
    let per_page = config.per_page.to_string();
    let response = reqwest::Client::new()
        .get(&config.base_path)
        .query(&[
            ("method", "flickr.photos.search"),
            ("api_key", config.api_key.as_str()),
            ("text", term),
            ("per_page", per_page.as_str()),
            ("extras", "url_m"),
            ("format", "json"),
            ("nojsoncallback", "1"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let response_text = response.text().await?;
    match parse_search_response(&response_text) {
        Ok(page) => {
            tracing::info!("Found {} photos matching {:?}", page.photo.len(), term);
            Ok(page)
        }
        Err(e) => {
            tracing::error!("Could not parse search response for {:?}: {}", term, e);
            Err(e)
        }
    }
}

pub fn check_image_content_type(
    headers: &reqwest::header::HeaderMap,
) -> Result<(), FetchError> {
    match headers.get(reqwest::header::CONTENT_TYPE) {
        Some(header_value) if header_value.as_bytes().starts_with(b"image/") => Ok(()),
        Some(header_value) => Err(FetchError::NotAnImage(
            String::from_utf8_lossy(header_value.as_bytes()).into_owned(),
        )),
        None => Err(FetchError::NoContentType),
    }
}

pub async fn fetch_image(url: &str) -> Result<image::DynamicImage, FetchError> {
    flickr_rate_limiter().until_ready().await;
    tracing::debug!("Fetching image {}", url);
    let response = reqwest::get(url).await?.error_for_status()?;
    check_image_content_type(response.headers())?;
    let bytes = response.bytes().await?;
    let image = image::load_from_memory(&bytes)?;
    tracing::debug!("Fetched image {} ({}x{})", url, image.width(), image.height());
    Ok(image)
}
