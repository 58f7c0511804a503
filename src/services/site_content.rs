use crate::db::Database;
use crate::error::AppResult;
use crate::models::pagina::Pagina;
use crate::models::site_content::{
    decode_payload, encode_payload, ContatoConfig, ContatoConfigPatch, FooterConfig,
    FooterConfigPatch, HomeConfig, HomeConfigPatch,
};
use crate::services::pagina::PaginaService;

pub const HOME_SLUG: &str = "home";
pub const CONTATO_SLUG: &str = "contato";
pub const FOOTER_SLUG: &str = "footer";

/// Typed facade over the slug store: merges persisted partial configs over
/// the compiled-in defaults on the way out, encodes patches on the way in.
///
/// Store errors propagate; visitor-facing routes decide whether to degrade
/// to defaults. Malformed payloads are not errors at all and fall back to
/// defaults silently.
pub struct SiteContentService<'a> {
    db: &'a Database,
}

impl<'a> SiteContentService<'a> {
    pub fn new(db: &'a Database) -> Self {
        SiteContentService { db }
    }

    fn store(&self) -> PaginaService<'a> {
        PaginaService::new(self.db)
    }

    pub async fn load_home(&self) -> AppResult<HomeConfig> {
        let record = self.store().get_by_slug(HOME_SLUG).await?;
        let patch: Option<HomeConfigPatch> =
            decode_payload(record.as_ref().and_then(|r| r.conteudo.as_deref()));
        Ok(HomeConfig::merge_over_defaults(patch))
    }

    /// Banners are normalized before persisting, so stored data satisfies
    /// the fixed-arity invariant even before the next load.
    pub async fn save_home(&self, patch: HomeConfigPatch) -> AppResult<Pagina> {
        let payload = encode_payload(&patch.normalized());
        self.store().upsert(HOME_SLUG, Some("Home"), &payload).await
    }

    pub async fn load_contato(&self) -> AppResult<ContatoConfig> {
        let record = self.store().get_by_slug(CONTATO_SLUG).await?;
        let patch: Option<ContatoConfigPatch> =
            decode_payload(record.as_ref().and_then(|r| r.conteudo.as_deref()));
        Ok(ContatoConfig::merge_over_defaults(patch))
    }

    pub async fn save_contato(&self, patch: ContatoConfigPatch) -> AppResult<Pagina> {
        let payload = encode_payload(&patch);
        self.store()
            .upsert(CONTATO_SLUG, Some("Contato"), &payload)
            .await
    }

    pub async fn load_footer(&self) -> AppResult<FooterConfig> {
        let record = self.store().get_by_slug(FOOTER_SLUG).await?;
        let patch: Option<FooterConfigPatch> =
            decode_payload(record.as_ref().and_then(|r| r.conteudo.as_deref()));
        Ok(FooterConfig::merge_over_defaults(patch))
    }

    pub async fn save_footer(&self, patch: FooterConfigPatch) -> AppResult<Pagina> {
        let payload = encode_payload(&patch);
        self.store()
            .upsert(FOOTER_SLUG, Some("Rodapé"), &payload)
            .await
    }

    /// Free-form pages carry plain text. No default merging: an absent page
    /// is an explicit empty state, not a silently defaulted one.
    pub async fn load_page(&self, slug: &str) -> AppResult<Option<Pagina>> {
        self.store().get_by_slug(slug).await
    }

    pub async fn save_page(
        &self,
        slug: &str,
        titulo: Option<&str>,
        conteudo: &str,
    ) -> AppResult<Pagina> {
        self.store().upsert(slug, titulo, conteudo).await
    }

    pub async fn list_pages(&self) -> AppResult<Vec<Pagina>> {
        self.store().list().await
    }
}
