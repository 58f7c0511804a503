use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The home carousel always exposes exactly this many slots.
pub const BANNER_SLOTS: usize = 3;

/// Serializes a configuration for the `conteudo` column.
pub fn encode_payload<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// Tolerant parse of a persisted payload. Absent, empty and malformed
/// payloads all come back as `None`; callers fall back to defaults.
pub fn decode_payload<T: DeserializeOwned>(payload: Option<&str>) -> Option<T> {
    let raw = payload?.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

/// Overlay rule shared by every named configuration: a persisted value only
/// wins over the default when it is present and non-blank.
fn overlay(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        if !v.trim().is_empty() {
            *target = v;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BannerSlide {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub href: String,
}

impl BannerSlide {
    pub fn new(image_url: &str, title: &str, subtitle: &str) -> Self {
        BannerSlide {
            image_url: image_url.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            href: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BannerSlidePatch {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub href: Option<String>,
}

impl From<BannerSlide> for BannerSlidePatch {
    fn from(slide: BannerSlide) -> Self {
        BannerSlidePatch {
            image_url: Some(slide.image_url),
            title: Some(slide.title),
            subtitle: Some(slide.subtitle),
            href: Some(slide.href),
        }
    }
}

/// Forces an arbitrary-length, possibly sparse banner list into exactly
/// `BANNER_SLOTS` well-formed slides: null entries are dropped, missing
/// fields become empty strings, the tail is padded with placeholders and
/// anything past the limit is cut. Surviving order is preserved.
pub fn normalize_banners(items: &[Option<BannerSlidePatch>]) -> Vec<BannerSlide> {
    let mut slides: Vec<BannerSlide> = items
        .iter()
        .flatten()
        .take(BANNER_SLOTS)
        .map(|b| BannerSlide {
            image_url: b.image_url.clone().unwrap_or_default(),
            title: b.title.clone().unwrap_or_default(),
            subtitle: b.subtitle.clone().unwrap_or_default(),
            href: b.href.clone().unwrap_or_default(),
        })
        .collect();
    slides.resize_with(BANNER_SLOTS, BannerSlide::default);
    slides
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomeConfig {
    pub hero_tag: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta_primary_label: String,
    pub cta_primary_href: String,
    pub cta_secondary_label: String,
    pub cta_secondary_href: String,
    pub banners: Vec<BannerSlide>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        HomeConfig {
            hero_tag: "CHIADO CONSTRUTORA".to_string(),
            hero_title: "Construção premium".to_string(),
            hero_subtitle: "com padrão e confiança".to_string(),
            cta_primary_label: String::new(),
            cta_primary_href: "/obras".to_string(),
            cta_secondary_label: "Fale conosco".to_string(),
            cta_secondary_href: "/contato".to_string(),
            banners: vec![
                BannerSlide::new(
                    "/brand/logo-empresa.png",
                    "Chiado Construtora",
                    "Seu banner 1",
                ),
                BannerSlide::new(
                    "/brand/logo-empresa.png",
                    "Projeto & Qualidade",
                    "Seu banner 2",
                ),
                BannerSlide::new("/brand/logo-empresa.png", "Transparência", "Seu banner 3"),
            ],
        }
    }
}

impl HomeConfig {
    /// Field-wise overlay of a persisted partial config onto the defaults.
    /// The merged banner list always goes through the normalizer.
    pub fn merge_over_defaults(patch: Option<HomeConfigPatch>) -> HomeConfig {
        let mut cfg = HomeConfig::default();
        if let Some(p) = patch {
            overlay(&mut cfg.hero_tag, p.hero_tag);
            overlay(&mut cfg.hero_title, p.hero_title);
            overlay(&mut cfg.hero_subtitle, p.hero_subtitle);
            overlay(&mut cfg.cta_primary_label, p.cta_primary_label);
            overlay(&mut cfg.cta_primary_href, p.cta_primary_href);
            overlay(&mut cfg.cta_secondary_label, p.cta_secondary_label);
            overlay(&mut cfg.cta_secondary_href, p.cta_secondary_href);
            if let Some(banners) = p.banners {
                cfg.banners = normalize_banners(&banners);
            }
        }
        cfg
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeConfigPatch {
    pub hero_tag: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub cta_primary_label: Option<String>,
    pub cta_primary_href: Option<String>,
    pub cta_secondary_label: Option<String>,
    pub cta_secondary_href: Option<String>,
    pub banners: Option<Vec<Option<BannerSlidePatch>>>,
}

impl HomeConfigPatch {
    /// Applies the fixed-arity banner invariant before the patch is
    /// persisted, so stored data already satisfies it on the next load.
    pub fn normalized(mut self) -> Self {
        if let Some(banners) = self.banners.take() {
            self.banners = Some(
                normalize_banners(&banners)
                    .into_iter()
                    .map(|slide| Some(BannerSlidePatch::from(slide)))
                    .collect(),
            );
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContatoConfig {
    pub titulo: String,
    pub subtitulo: String,
    pub telefone: String,
    pub whatsapp_link: String,
    pub email: String,
    pub cidade: String,
    pub endereco: String,
    pub mapa_link: String,
}

impl Default for ContatoConfig {
    fn default() -> Self {
        ContatoConfig {
            titulo: "Contato".to_string(),
            subtitulo: "Fale com a Chiado Construtora e tire suas dúvidas.".to_string(),
            telefone: "(coloque seu telefone)".to_string(),
            whatsapp_link: String::new(),
            email: "(coloque seu e-mail)".to_string(),
            cidade: "(coloque sua cidade)".to_string(),
            endereco: String::new(),
            mapa_link: String::new(),
        }
    }
}

impl ContatoConfig {
    pub fn merge_over_defaults(patch: Option<ContatoConfigPatch>) -> ContatoConfig {
        let mut cfg = ContatoConfig::default();
        if let Some(p) = patch {
            overlay(&mut cfg.titulo, p.titulo);
            overlay(&mut cfg.subtitulo, p.subtitulo);
            overlay(&mut cfg.telefone, p.telefone);
            overlay(&mut cfg.whatsapp_link, p.whatsapp_link);
            overlay(&mut cfg.email, p.email);
            overlay(&mut cfg.cidade, p.cidade);
            overlay(&mut cfg.endereco, p.endereco);
            overlay(&mut cfg.mapa_link, p.mapa_link);
        }
        cfg
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContatoConfigPatch {
    pub titulo: Option<String>,
    pub subtitulo: Option<String>,
    pub telefone: Option<String>,
    pub whatsapp_link: Option<String>,
    pub email: Option<String>,
    pub cidade: Option<String>,
    pub endereco: Option<String>,
    pub mapa_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterContato {
    pub telefone: String,
    pub email: String,
    pub cidade: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterContatoPatch {
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cidade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    pub empresa_nome: String,
    pub descricao: String,
    pub links: Vec<FooterLink>,
    pub contato: FooterContato,
    /// Template; `{year}` is substituted when rendering, never at save time.
    pub copyright: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        FooterConfig {
            empresa_nome: "Chiado Construtora".to_string(),
            descricao: "Construção e incorporação com padrão premium. Acompanhamento de obra e transparência em cada etapa.".to_string(),
            links: vec![
                FooterLink {
                    label: "A Construtora".to_string(),
                    href: "/sobre".to_string(),
                },
                FooterLink {
                    label: "Tabela (PDF)".to_string(),
                    href: "/tabela".to_string(),
                },
                FooterLink {
                    label: "Contato".to_string(),
                    href: "/contato".to_string(),
                },
            ],
            contato: FooterContato {
                telefone: "(coloque seu telefone)".to_string(),
                email: "(coloque seu e-mail)".to_string(),
                cidade: "(coloque sua cidade)".to_string(),
            },
            copyright: "© {year} Chiado Construtora. Todos os direitos reservados.".to_string(),
        }
    }
}

impl FooterConfig {
    pub fn merge_over_defaults(patch: Option<FooterConfigPatch>) -> FooterConfig {
        let mut cfg = FooterConfig::default();
        if let Some(p) = patch {
            overlay(&mut cfg.empresa_nome, p.empresa_nome);
            overlay(&mut cfg.descricao, p.descricao);
            overlay(&mut cfg.copyright, p.copyright);
            if let Some(links) = p.links {
                cfg.links = links;
            }
            if let Some(contato) = p.contato {
                overlay(&mut cfg.contato.telefone, contato.telefone);
                overlay(&mut cfg.contato.email, contato.email);
                overlay(&mut cfg.contato.cidade, contato.cidade);
            }
        }
        cfg
    }

    pub fn rendered_copyright(&self, year: i32) -> String {
        self.copyright.replace("{year}", &year.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfigPatch {
    pub empresa_nome: Option<String>,
    pub descricao: Option<String>,
    pub links: Option<Vec<FooterLink>>,
    pub contato: Option<FooterContatoPatch>,
    pub copyright: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner_patch(image_url: &str) -> Option<BannerSlidePatch> {
        Some(BannerSlidePatch {
            image_url: Some(image_url.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn decode_tolerates_garbage() {
        assert!(decode_payload::<HomeConfigPatch>(None).is_none());
        assert!(decode_payload::<HomeConfigPatch>(Some("")).is_none());
        assert!(decode_payload::<HomeConfigPatch>(Some("   ")).is_none());
        assert!(decode_payload::<HomeConfigPatch>(Some("not json {")).is_none());
        assert!(decode_payload::<HomeConfigPatch>(Some("[1,2,3]")).is_none());
        assert!(decode_payload::<HomeConfigPatch>(Some("{}")).is_some());
    }

    #[test]
    fn encode_then_decode_is_lossless() {
        let patch = HomeConfigPatch {
            hero_title: Some("Nova obra".to_string()),
            banners: Some(vec![banner_patch("/a.png"), None]),
            ..Default::default()
        };
        let payload = encode_payload(&patch);
        let decoded: HomeConfigPatch = decode_payload(Some(&payload)).unwrap();
        assert_eq!(decoded.hero_title.as_deref(), Some("Nova obra"));
        assert_eq!(decoded.banners.as_ref().unwrap().len(), 2);
        assert!(decoded.banners.as_ref().unwrap()[1].is_none());
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let patch = HomeConfigPatch {
            hero_title: Some("x".to_string()),
            ..Default::default()
        };
        let payload = encode_payload(&patch);
        assert!(payload.contains("\"heroTitle\""));
    }

    #[test]
    fn normalize_is_total_for_lengths_0_to_10() {
        for len in 0..=10 {
            let items: Vec<Option<BannerSlidePatch>> =
                (0..len).map(|i| banner_patch(&format!("/b{i}.png"))).collect();
            let slides = normalize_banners(&items);
            assert_eq!(slides.len(), BANNER_SLOTS);
        }
    }

    #[test]
    fn normalize_drops_nulls_and_preserves_order() {
        let items = vec![None, banner_patch("/first.png"), None, banner_patch("/second.png")];
        let slides = normalize_banners(&items);
        assert_eq!(slides[0].image_url, "/first.png");
        assert_eq!(slides[1].image_url, "/second.png");
        assert_eq!(slides[2], BannerSlide::default());
    }

    #[test]
    fn normalize_truncates_excess() {
        let items: Vec<_> = (0..7).map(|i| banner_patch(&format!("/b{i}.png"))).collect();
        let slides = normalize_banners(&items);
        assert_eq!(slides.len(), BANNER_SLOTS);
        assert_eq!(slides[2].image_url, "/b2.png");
    }

    #[test]
    fn normalize_fills_missing_fields_with_empty_strings() {
        let slides = normalize_banners(&[Some(BannerSlidePatch::default())]);
        assert_eq!(slides[0], BannerSlide::default());
    }

    #[test]
    fn merge_keeps_defaults_for_absent_fields() {
        let patch = HomeConfigPatch {
            hero_title: Some("Nova obra".to_string()),
            ..Default::default()
        };
        let cfg = HomeConfig::merge_over_defaults(Some(patch));
        assert_eq!(cfg.hero_title, "Nova obra");
        assert_eq!(cfg.hero_subtitle, "com padrão e confiança");
        assert_eq!(cfg.banners.len(), BANNER_SLOTS);
    }

    #[test]
    fn merge_without_record_yields_defaults() {
        let cfg = HomeConfig::merge_over_defaults(None);
        assert_eq!(cfg, HomeConfig::default());
        assert_eq!(cfg.hero_title, "Construção premium");
    }

    #[test]
    fn blank_persisted_value_does_not_override_default() {
        let patch = ContatoConfigPatch {
            titulo: Some("   ".to_string()),
            email: Some("obras@chiado.com.br".to_string()),
            ..Default::default()
        };
        let cfg = ContatoConfig::merge_over_defaults(Some(patch));
        assert_eq!(cfg.titulo, "Contato");
        assert_eq!(cfg.email, "obras@chiado.com.br");
    }

    #[test]
    fn merged_home_banners_are_normalized() {
        let patch = HomeConfigPatch {
            banners: Some(vec![banner_patch("/only.png")]),
            ..Default::default()
        };
        let cfg = HomeConfig::merge_over_defaults(Some(patch));
        assert_eq!(cfg.banners.len(), BANNER_SLOTS);
        assert_eq!(cfg.banners[0].image_url, "/only.png");
        assert_eq!(cfg.banners[1].image_url, "");
    }

    #[test]
    fn normalized_patch_persists_fixed_arity() {
        let patch = HomeConfigPatch {
            banners: Some(vec![banner_patch("/a.png"), None]),
            ..Default::default()
        }
        .normalized();
        let banners = patch.banners.unwrap();
        assert_eq!(banners.len(), BANNER_SLOTS);
        assert!(banners.iter().all(|b| b.is_some()));
    }

    #[test]
    fn footer_links_come_from_patch_when_present() {
        let patch = FooterConfigPatch {
            links: Some(vec![FooterLink {
                label: "Início".to_string(),
                href: "/".to_string(),
            }]),
            ..Default::default()
        };
        let cfg = FooterConfig::merge_over_defaults(Some(patch));
        assert_eq!(cfg.links.len(), 1);
        assert_eq!(cfg.links[0].label, "Início");
    }

    #[test]
    fn copyright_substitutes_year_at_render_time() {
        let cfg = FooterConfig::default();
        assert_eq!(
            cfg.rendered_copyright(2026),
            "© 2026 Chiado Construtora. Todos os direitos reservados."
        );
        // the stored template keeps the placeholder
        assert!(cfg.copyright.contains("{year}"));
    }
}
