//! Thematic sitemap partitioning.
//!
//! The site generator emits a single `sitemap-0.xml`. Salary destination and
//! corridor pages vastly outnumber the calculators, so the url set is split
//! into three documents and the index is rewritten to point at them.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::error::SitemapError;

/// Generated sitemap read by the splitter.
pub const SOURCE_SITEMAP: &str = "sitemap-0.xml";
/// Index document rewritten by the splitter.
pub const INDEX_SITEMAP: &str = "sitemap-index.xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const URL_OPEN: &str = "<url>";
const URL_CLOSE: &str = "</url>";
const LOC_OPEN: &str = "<loc>";
const LOC_CLOSE: &str = "</loc>";

/// Thematic bucket of a sitemap url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Core,
    Destinations,
    Corridors,
}

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Core, Partition::Destinations, Partition::Corridors];

    /// First matching rule wins: destinations, then corridors, else core.
    pub fn classify(loc: &str) -> Self {
        if loc.contains("/salary-in-") {
            Self::Destinations
        } else if loc.contains("/salary/") || loc.contains("/salary-equivalent-") {
            Self::Corridors
        } else {
            Self::Core
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Core => "sitemap-core.xml",
            Self::Destinations => "sitemap-destinations.xml",
            Self::Corridors => "sitemap-corridors.xml",
        }
    }
}

/// One `<url>` record of a url set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlRecord<'a> {
    /// The full `<url>...</url>` block, copied verbatim into the output.
    pub block: &'a str,
    /// Trimmed `<loc>` value.
    pub loc: &'a str,
}

/// A parsed url set document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSet<'a> {
    /// The original `<urlset ...>` opening tag, namespaces included.
    pub root_tag: &'a str,
    pub records: Vec<UrlRecord<'a>>,
}

impl<'a> UrlSet<'a> {
    /// Extract the root tag and every `<url>` record, in document order.
    pub fn parse(doc: &'a str) -> Result<Self, SitemapError> {
        let root_start = doc
            .find("<urlset")
            .ok_or_else(|| SitemapError::malformed("missing <urlset> root element"))?;
        let root_end = doc[root_start..]
            .find('>')
            .map(|i| root_start + i + 1)
            .ok_or_else(|| SitemapError::malformed("unterminated <urlset> tag"))?;
        if !doc[root_end..].contains("</urlset>") {
            return Err(SitemapError::malformed("missing </urlset> closing tag"));
        }

        let mut records = Vec::new();
        let mut cursor = root_end;
        while let Some(offset) = doc[cursor..].find(URL_OPEN) {
            let start = cursor + offset;
            let end = doc[start..]
                .find(URL_CLOSE)
                .map(|i| start + i + URL_CLOSE.len())
                .ok_or_else(|| {
                    SitemapError::malformed(format!("unterminated <url> block at byte {start}"))
                })?;

            let block = &doc[start..end];
            let loc = extract_loc(block).ok_or_else(|| {
                SitemapError::malformed(format!("<url> block at byte {start} has no <loc>"))
            })?;

            records.push(UrlRecord { block, loc });
            cursor = end;
        }

        Ok(Self {
            root_tag: &doc[root_start..root_end],
            records,
        })
    }

    /// Split the records into the three partitions, keeping document order.
    pub fn partition(&self) -> PartitionedUrlSet<'a> {
        let mut partitioned = PartitionedUrlSet {
            root_tag: self.root_tag,
            core: Vec::new(),
            destinations: Vec::new(),
            corridors: Vec::new(),
        };
        for record in &self.records {
            partitioned.bucket_mut(Partition::classify(record.loc)).push(record.block);
        }
        partitioned
    }
}

fn extract_loc(block: &str) -> Option<&str> {
    let start = block.find(LOC_OPEN)? + LOC_OPEN.len();
    let end = start + block[start..].find(LOC_CLOSE)?;
    Some(block[start..end].trim())
}

/// Url blocks grouped by partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedUrlSet<'a> {
    pub root_tag: &'a str,
    pub core: Vec<&'a str>,
    pub destinations: Vec<&'a str>,
    pub corridors: Vec<&'a str>,
}

impl<'a> PartitionedUrlSet<'a> {
    pub fn bucket(&self, partition: Partition) -> &[&'a str] {
        match partition {
            Partition::Core => &self.core,
            Partition::Destinations => &self.destinations,
            Partition::Corridors => &self.corridors,
        }
    }

    fn bucket_mut(&mut self, partition: Partition) -> &mut Vec<&'a str> {
        match partition {
            Partition::Core => &mut self.core,
            Partition::Destinations => &mut self.destinations,
            Partition::Corridors => &mut self.corridors,
        }
    }

    pub fn total(&self) -> usize {
        self.core.len() + self.destinations.len() + self.corridors.len()
    }

    /// Render one partition as a standalone url set document.
    pub fn render(&self, partition: Partition) -> String {
        format!(
            "{XML_DECLARATION}\n{}\n{}\n</urlset>",
            self.root_tag,
            self.bucket(partition).join("\n")
        )
    }
}

/// Render the sitemap index pointing at the three partitions.
pub fn render_index(site_url: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    let mut xml = format!(
        "{XML_DECLARATION}\n<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n"
    );
    for partition in Partition::ALL {
        xml.push_str(&format!(
            "  <sitemap>\n    <loc>{site_url}/{}</loc>\n  </sitemap>\n",
            partition.file_name()
        ));
    }
    xml.push_str("</sitemapindex>");
    xml
}

/// Counts written by one split run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub input: usize,
    pub core: usize,
    pub destinations: usize,
    pub corridors: usize,
}

/// Splits `<dist>/sitemap-0.xml` into partitions and rewrites the index.
pub struct SitemapSplitter {
    dist_dir: PathBuf,
    site_url: String,
}

impl SitemapSplitter {
    pub fn new(dist_dir: impl Into<PathBuf>, site_url: impl Into<String>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            site_url: site_url.into(),
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.dist_dir.join(SOURCE_SITEMAP)
    }

    pub fn split(&self) -> crate::Result<SplitSummary> {
        info!("Splitting sitemaps thematically...");

        let source = self.source_path();
        let doc = std::fs::read_to_string(&source).map_err(|e| SitemapError::io(&source, e))?;
        let url_set = UrlSet::parse(&doc)?;
        let partitioned = url_set.partition();

        for partition in Partition::ALL {
            let path = self.dist_dir.join(partition.file_name());
            write(&path, &partitioned.render(partition))?;
            info!(
                "Generated {} ({} URLs)",
                partition.file_name(),
                partitioned.bucket(partition).len()
            );
        }

        write(&self.dist_dir.join(INDEX_SITEMAP), &render_index(&self.site_url))?;
        info!("Updated {}", INDEX_SITEMAP);

        Ok(SplitSummary {
            input: url_set.records.len(),
            core: partitioned.core.len(),
            destinations: partitioned.destinations.len(),
            corridors: partitioned.corridors.len(),
        })
    }
}

fn write(path: &Path, contents: &str) -> Result<(), SitemapError> {
    std::fs::write(path, contents).map_err(|e| SitemapError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
