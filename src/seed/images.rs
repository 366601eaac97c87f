//! Placeholder image pool and image-list synthesis

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use super::record::{IMAGES_FIELD, Record};
use super::syntax::quote_single;
use crate::error::{Result, images};

/// Field holding a record's primary image reference.
pub const IMAGE_FIELD: &str = "image";

/// Placeholder product photos already used across the seed catalog.
pub const DEFAULT_IMAGE_POOL: [&str; 10] = [
    "https://lh3.googleusercontent.com/aida-public/AB6AXuBoFyER9pdtDnuaC0PscjJSKfsUyEntOiNej1YkSDM4vBrl78GdLlpo7eaYzyNckVwkHXny9bgTnwEAaekW8GK8OVM_gbqMYK5011a6LiM02ksL6OJLwJc8_Hg33UpUrppxwT5tJbmjURSsZksQKlKvNdQJ4rKkUJaEE57-JzQw7vtFr0LWLsIhgcitjsi-P_dtHjYorVU1w2uMeDICutBJON1fpuFr63edw4YvaQ3-Vrj_j6PTJ2NxDYxBjdyi0ZfaxRIs1bvm-VY",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAyOuuoER_GQZsnHfUk3TCiQNOUhZqBxgCceAgnYNdoCbza2klQq7zMAY4bXnZ1wJghVG4c7x1X2WqZ5fHgjmMpkI0AJOYtMvO9pvF6CW1mJft9QDdQ-mE7ClxX4cLhVn-V_9RV3Ax-zcHH325v06q1y3oDQAOx-wnv8xDrZoyfjW8iB-QDioE-LYDzNJZr1aZangd2CZwABZFJQqJ31BwEaZU9i1BSWU0ehssQbK5uN5ZphkniB7k1b3y0Mei2K_05lBxcCgzms5g",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAcP1SM3mfwFBoquuBWoz__0nrOLtN8RxRjRAmigdnqdsePVEqi9MLO889mNylT7KhG6BEIdygbM_5YNXAGaessHG8MtULsFEhyp76VcXU_J6zyHRG9HmkFvjLI1rOdDL5OEFd0M5ANizVNRRZ5JLHgme61a84GtNjPSZdjX1R_NqbjQAVW_Bwv4RTde_lTR6MaFMplfEa0WRP_e7r8kJD06YMtc3_p_iCUCLznB7-apIoxPhpnPsfZKhCZ2uYqzaeD5H46Cvoq6Jc",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAFMqAqtNTQKSUSwn4wix2mVgoVRd0H24ZEL8mc-KahVYugPMwUyyO7acy5iv4EzQ-tvQ9OUyoMz8mnKcphyFVmXhpB2n8cUNNIHfTI9MysQheU-VIkaDS5U-Phv4-Z5sW6jNi5i8rYAgeqUqd0kbeW0PHieIBS6Y4E6p2grqtReh3Ck1wG3mR6KXZbqzgPF4rd1AwDEvnZD63roPHKp61vx0vu8PBDVH2gFx3hDuJlBuxMhkDT_iYDbq4wxnxhlxxC8umoelfUetA",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAiwItxtH0JJmLvWVXoODE6wkscbDzatT8b7Il1L-9P1I_JN9BrXw07qzumYONf9AaFPf-aIm_XKp6HhXRDc1XhH3h4p6FVwyTZawOIDiQpz-PR82_h6U3lKf_yyrDMVVNhK1clksKb9njYud52BSQIR7lL4juvVL5fRJGYlU76AxEdTFXOUrCRPHjsRY0hrXLYqVmp6msDdop_Y2P0onTTa7s3mpbyyNgyKJvEw_FnFWz2NidUhik3odMMaRWkB1dsP9bH0CC6o6I",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAIp8PONZrBzQJOTWmY-NR225RYmAOK5k-NuTw1DkF9YflRcECoy9QTLF9tDWsbKuO0M6dn3f6kkCG8x3Eg9Z_AkYbSIFWHVMQJ9I88yE1Qx65IzrOt6NPEKNY0tmXrZ77e5tOydYA-UNib7qGTtgTWAv-kkXdauSKorOGVUInTQfqXHXueB5YuwLoFzIZMPUdoz2ckNdZvRYa3ek-zlmZX-mCoJQF2Q13sCey7qXtLm7C6A3jDPRB5MwVpyLdfcrHAd2O11jfgkA8",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAWL-oSxkESnYddTPSI30h7FSi_hGVoCfejRb998N167y00XgTQ8F9zrfQQeoLKYYya0phCvlTpXOEoyzRljEtrlZuLheT4ITOEUJH9dQxccspAGrbyiRS880grxdQ4XIvsuvitm5oJJoq-Nbs1icBH2S8DO1wM4f_utAZmw_EuhUdi_ly3P2WC4nqJNgueDCNme6JwQE7G6gwWECYvG5mJOwkDVbU-S7i5NJnO2-Ttl6uYeHrkPA3zGyzmLXqkUcP60JBrfzRxfTQ",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuD7JM5MXmHHhs4l1bezu6ioxRC_B7HmXIjc6zpvwqyAE4qSpEZkNistyVZ206sktIYNFrnVLgq_9VNBtRo9-C9wHAhX3_mREIzHXB1HZT8y0o_awsQeuphTC-tdPojndXAAg-7kkYhUNlZQk5gV9xOtJqLUNAQPr9aTvZpA2wzf0LbnH3IY5Ci_ug0ai9sziZngm-XTj8v9SDUvg91FvvsUVC42HCj55AsThEM3C_XfHatVVUBpBRRdTSuvJuMxKPnH5u30_9bu514",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuBkPLHK_HNG4jCTkVYqsVwfjJoCL8-UvRUo5hAqFf94fMAcyvVtoottzeQFlNn485V6UNWtIxbZSx4kDQnpbKm11jqjWA5fxYiAWqMF42ZGjQX5H8aCer6BoT-wPfrai2pJlNJiRIx9ZMsmVh5jFgwxlTLb-tEuh0RwJtjt_N7JgWvc8PYeShbCwNxMFcEr9t08LojGLBlPe_6vXxyPZkF4hpIwWH50TLMAkwG2ICx60yvRkmS3KsjnUHEjgQT0kvTaJy2JY7M_4A4",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuDbGSBBi5WNENPdxM45p08Sp6niq8pUeKmqIxT6KGdr1DAxDGk33lInZUZExYVTKhH0FSbMsCK_RpUIr7tnxblDBVxQwPMDqTpwYoF16f5gjCdKhlbMXwDxCLEpzAwjfSQrAlUV9AwmsL5wNAf_1HUgNVBIVY_lPJfHqeIUFwU0Lh0jc0mrfsVrV0rk1qizti1MW7uCd1ERyDJN8nbCQn9uwGWCqolFdH-BccGDhCdha--i-tXvirTHmO7En1eOJlwFOF_Cs7kwegs",
];

/// Indentation of list entries inside a product literal.
const ENTRY_INDENT: &str = "      ";
/// Indentation of the list's closing bracket.
const CLOSE_INDENT: &str = "    ";

/// Ordered, immutable set of candidate image URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePool {
    urls: Vec<String>,
}

impl Default for ImagePool {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_POOL)
    }
}

impl ImagePool {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }
}

/// Builds a fresh image list for a kept record: its own primary image
/// first, then distinct pool entries.
#[derive(Debug, Clone)]
pub struct ImageSynthesizer {
    pool: ImagePool,
    min_images: usize,
    max_images: usize,
}

impl Default for ImageSynthesizer {
    fn default() -> Self {
        Self::new(ImagePool::default(), 3, 5)
    }
}

impl ImageSynthesizer {
    pub fn new(pool: ImagePool, min_images: usize, max_images: usize) -> Self {
        Self {
            pool,
            min_images,
            max_images,
        }
    }

    /// The record's `image` value, or the pool's first entry.
    pub fn anchor_for(&self, record: &Record<'_>) -> Option<String> {
        record
            .string_value(IMAGE_FIELD)
            .or_else(|| self.pool.first().map(str::to_string))
    }

    /// Picks the full image list for `record`.
    ///
    /// The list length is uniform in `min_images..=max_images`. The anchor
    /// is never sampled a second time.
    pub fn select_images<R: Rng + ?Sized>(
        &self,
        record: &Record<'_>,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let anchor = self
            .anchor_for(record)
            .ok_or_else(|| images::pool_exhausted(1, 0))?;
        let count = rng.random_range(self.min_images..=self.max_images);
        let wanted = count.saturating_sub(1);

        let candidates: Vec<&String> = self.pool.urls.iter().filter(|u| **u != anchor).collect();
        if wanted > candidates.len() {
            return Err(images::pool_exhausted(wanted, candidates.len()));
        }

        let mut selected = Vec::with_capacity(count);
        selected.push(anchor);
        selected.extend(
            index::sample(rng, candidates.len(), wanted)
                .into_iter()
                .map(|i| candidates[i].clone()),
        );
        debug!(
            count = selected.len(),
            anchor_from_pool = self.pool.contains(&selected[0]),
            "synthesized image list"
        );
        Ok(selected)
    }

    /// Renders the replacement `images: [...]` property for `fragment`.
    pub fn synthesize_images<R: Rng + ?Sized>(
        &self,
        fragment: &str,
        rng: &mut R,
    ) -> Result<String> {
        let record = Record::parse(fragment)?;
        let selected = self.select_images(&record, rng)?;
        Ok(render_images_field(&selected))
    }
}

/// Renders an `images` property, one quoted entry per line.
pub fn render_images_field(urls: &[String]) -> String {
    let entries: Vec<String> = urls.iter().map(|u| quote_single(u)).collect();
    format!(
        "{IMAGES_FIELD}: [\n{ENTRY_INDENT}{}\n{CLOSE_INDENT}]",
        entries.join(&format!(",\n{ENTRY_INDENT}"))
    )
}
