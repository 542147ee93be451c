//! Download source catalog and request resolution.
//!
//! The firmware never fetches anything itself: a resolved
//! [`DownloadRequest`] is handed to the download coprocessor and the
//! button animates until that side reports completion.

use heapless::String;

use crate::config::URL_CAPACITY;
use crate::error::Error;

/// Sources offered on the main screen, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DownloadSource {
    Glide,
    ProjectStarter,
    Retrofit,
    /// User-provided URL.
    Custom,
}

impl DownloadSource {
    pub const ALL: [DownloadSource; 4] = [
        DownloadSource::Glide,
        DownloadSource::ProjectStarter,
        DownloadSource::Retrofit,
        DownloadSource::Custom,
    ];

    /// Name used in the list, the notice and the detail screen.
    pub const fn title(self) -> &'static str {
        match self {
            DownloadSource::Glide => "Glide",
            DownloadSource::ProjectStarter => "Project Starter",
            DownloadSource::Retrofit => "Retrofit",
            DownloadSource::Custom => "Custom Download",
        }
    }

    /// Preset URL; `None` for [`DownloadSource::Custom`].
    pub const fn url(self) -> Option<&'static str> {
        match self {
            DownloadSource::Glide => Some("https://github.com/bumptech/glide"),
            DownloadSource::ProjectStarter => Some(
                "https://github.com/udacity/nd940-c3-advanced-android-programming-project-starter",
            ),
            DownloadSource::Retrofit => Some("https://github.com/square/retrofit"),
            DownloadSource::Custom => None,
        }
    }

    /// Row index → source, for list navigation.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// What to hand to the download coprocessor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DownloadRequest {
    pub source: DownloadSource,
    pub url: String<URL_CAPACITY>,
}

impl DownloadRequest {
    pub fn title(&self) -> &'static str {
        self.source.title()
    }
}

/// Turn the checked source (if any) into a request.
pub fn resolve(
    selection: Option<DownloadSource>,
    custom_url: &str,
) -> Result<DownloadRequest, Error> {
    let source = selection.ok_or(Error::NoSelection)?;
    let url = match source.url() {
        Some(url) => url,
        None => {
            let url = custom_url.trim();
            if !is_valid_url(url) {
                return Err(Error::InvalidUrl);
            }
            url
        }
    };

    let mut buf = String::new();
    buf.push_str(url).map_err(|()| Error::UrlTooLong)?;
    Ok(DownloadRequest { source, url: buf })
}

/// Loose web-URL check: optional `http://` / `https://` (any case),
/// optional `userinfo@`, a dotted host ending in an alphabetic TLD or an
/// IPv4 address, optional port, optional path. No whitespace anywhere.
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }

    let rest = match url.split_once("://") {
        Some((scheme, rest)) => {
            if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
                return false;
            }
            rest
        }
        None => url,
    };
    if rest.contains("://") {
        return false;
    }

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = match rest[..authority_end].rsplit_once('@') {
        Some((userinfo, host_port)) => {
            if userinfo.is_empty() {
                return false;
            }
            host_port
        }
        None => &rest[..authority_end],
    };
    let host = match authority.split_once(':') {
        Some((host, port)) => {
            if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) || port.len() > 5 {
                return false;
            }
            host
        }
        None => authority,
    };

    is_ipv4(host) || is_valid_host(host)
}

fn is_ipv4(host: &str) -> bool {
    let mut octets = 0;
    for part in host.split('.') {
        octets += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if part.parse::<u16>().map_or(true, |octet| octet > 255) {
            return false;
        }
    }
    octets == 4
}

fn is_valid_host(host: &str) -> bool {
    let Some((_, tld)) = host.rsplit_once('.') else {
        return false;
    };
    if tld.len() < 2 || !tld.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
