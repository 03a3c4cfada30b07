//! Static site build.
//!
//! Loads every page the store serves through the [`PageLoader`] and writes
//! one HTML file per page, plus the home and not-found pages:
//!
//! ```text
//! dist/
//! ├── index.html                     # Home: list of every page
//! ├── 404.html                       # Content not found
//! ├── actualizacion-datos/
//! │   └── index.html                 # One directory per page id
//! └── declaracion-patrimonial/
//!     └── index.html
//! ```
//!
//! Pages are rendered in their initial state: first slide of every gallery,
//! no modal open, no filters applied.

use crate::config::SiteConfig;
use crate::content::PageContent;
use crate::loader::{LoadError, PageLoader};
use crate::render::{self, PageLink, RenderContext};
use crate::routes;
use crate::session::PageSession;
use crate::store::{ContentStore, StoreError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    #[error("page id '{0}' cannot be used as a directory name")]
    InvalidPageId(String),
}

/// One generated content page.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPage {
    pub id: String,
    pub title: String,
    /// Output file, relative to the output directory.
    pub path: PathBuf,
    pub items: usize,
    pub pdfs: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: Vec<BuiltPage>,
}

/// Load every page in the store, sorted by id.
///
/// Ids listed by the store are expected to resolve directly; a page that only
/// resolves through the fallback is skipped, since writing the fallback under
/// another id would publish duplicate content.
pub async fn load_all_pages(loader: &PageLoader) -> Result<Vec<PageContent>, SiteError> {
    let ids = loader.store().page_ids().await?;
    let mut pages = Vec::with_capacity(ids.len());
    for id in ids {
        if !routes::is_valid_segment(&id) {
            return Err(SiteError::InvalidPageId(id));
        }
        let loaded = loader.load(&id).await?;
        if loaded.used_fallback {
            tracing::warn!(page = %id, "listed page did not resolve, skipping");
            continue;
        }
        pages.push(loaded.content);
    }
    Ok(pages)
}

/// Header links for every page the store lists, sorted by id.
///
/// Pages are fetched concurrently and straight from the store, without the
/// loader's fallback. A page that misses or fails is left out of the links;
/// it never keeps the requested page from rendering.
pub async fn nav_links(store: &Arc<dyn ContentStore>) -> Vec<PageLink> {
    let ids = match store.page_ids().await {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!(error = %err, "cannot list pages, navigation left empty");
            return Vec::new();
        }
    };

    let mut fetches = JoinSet::new();
    for id in ids {
        let store = Arc::clone(store);
        fetches.spawn(async move {
            let fetched = store.fetch_page_content(&id).await;
            (id, fetched)
        });
    }

    let mut links = Vec::new();
    while let Some(joined) = fetches.join_next().await {
        match joined {
            Ok((_, Ok(Some(page)))) => links.push(PageLink::from_page(&page)),
            Ok((id, Ok(None))) => {
                tracing::warn!(page = %id, "listed page is missing, left out of navigation");
            }
            Ok((id, Err(err))) => {
                tracing::warn!(page = %id, error = %err, "page failed, left out of navigation");
            }
            Err(err) => tracing::warn!(error = %err, "navigation fetch task failed"),
        }
    }
    links.sort_by(|a, b| a.id.cmp(&b.id));
    links
}

/// Render the whole site into `output_dir`.
pub async fn build_site(
    loader: &PageLoader,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<BuildReport, SiteError> {
    let pages = load_all_pages(loader).await?;
    let nav = pages.iter().map(PageLink::from_page).collect();
    let ctx = RenderContext::new(config).with_nav(nav);

    fs::create_dir_all(output_dir)?;
    fs::write(
        output_dir.join("index.html"),
        render::render_home(&ctx).into_string(),
    )?;
    fs::write(
        output_dir.join("404.html"),
        render::render_not_found(&ctx, None).into_string(),
    )?;

    let mut built = Vec::with_capacity(pages.len());
    for page in pages {
        let rel_path = Path::new(&page.id).join("index.html");
        fs::create_dir_all(output_dir.join(&page.id))?;

        let entry = BuiltPage {
            id: page.id.clone(),
            title: page.title.clone(),
            path: rel_path.clone(),
            items: page.items.len(),
            pdfs: page.pdf_count(),
        };
        let session = PageSession::new(page);
        fs::write(
            output_dir.join(&rel_path),
            render::render_page(&ctx, &session).into_string(),
        )?;
        tracing::debug!(page = %entry.id, path = %rel_path.display(), "wrote page");
        built.push(entry);
    }

    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        pages: built,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    const FALLBACK: &str = "actualizacion-datos";

    fn loader_for(pages: Vec<PageContent>) -> PageLoader {
        PageLoader::new(Arc::new(store_with(pages)), FALLBACK)
    }

    #[tokio::test]
    async fn build_writes_home_404_and_pages() {
        let tmp = TempDir::new().unwrap();
        let loader = loader_for(vec![
            page_with(FALLBACK, vec![rich_item("intro", 1)]),
            page_with(
                "manuales",
                vec![pdf_item("auditoria", 1, "Auditoría", "Manual de Auditoría")],
            ),
        ]);

        let report = build_site(&loader, &SiteConfig::default(), tmp.path())
            .await
            .unwrap();

        assert!(tmp.path().join("index.html").exists());
        assert!(tmp.path().join("404.html").exists());
        let ids: Vec<_> = report.pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, [FALLBACK, "manuales"]);
        assert_eq!(report.pages[1].pdfs, 1);

        let manuales = fs::read_to_string(tmp.path().join("manuales/index.html")).unwrap();
        assert!(manuales.contains("Manual de Auditoría"));
        let home = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(home.contains("href=\"/manuales/\""));
    }

    #[tokio::test]
    async fn empty_store_still_writes_home_and_404() {
        let tmp = TempDir::new().unwrap();
        let report = build_site(&loader_for(vec![]), &SiteConfig::default(), tmp.path())
            .await
            .unwrap();
        assert!(report.pages.is_empty());
        assert!(tmp.path().join("404.html").exists());
    }

    #[tokio::test]
    async fn unsafe_page_id_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let loader = loader_for(vec![page_with("../escape", vec![])]);
        let err = build_site(&loader, &SiteConfig::default(), tmp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::InvalidPageId(id) if id == "../escape"));
    }

    #[tokio::test]
    async fn nav_links_skip_a_failing_page() {
        let store: Arc<dyn ContentStore> = Arc::new(BrokenPageStore {
            inner: store_with(vec![page_with("a", vec![rich_item("intro", 1)])]),
            broken: "b".to_string(),
        });
        let loader = PageLoader::new(Arc::clone(&store), FALLBACK);

        assert!(load_all_pages(&loader).await.is_err());

        let links = nav_links(&store).await;
        let ids: Vec<_> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
        assert_eq!(loader.load("a").await.unwrap().content.id, "a");
    }

    #[tokio::test]
    async fn nav_links_are_sorted_by_id() {
        let store: Arc<dyn ContentStore> = Arc::new(store_with(vec![
            page_with("zeta", vec![]),
            page_with("alpha", vec![]),
            page_with("medio", vec![]),
        ]));
        let ids: Vec<_> = nav_links(&store).await.into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["alpha", "medio", "zeta"]);
    }
}
