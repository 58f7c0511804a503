use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Obra {
    pub id: String,
    pub nome: String,
    pub slug: String,
    pub descricao: Option<String>,
    pub banner: Option<String>,
    pub banner_real: Option<String>,
    pub concluida: bool,
    pub created_at: i64,
}

impl Obra {
    /// A finished obra shows its real photo when one exists; everything else
    /// falls back to the 3D render.
    pub fn display_banner(&self) -> Option<&str> {
        if self.concluida {
            if let Some(real) = self.banner_real.as_deref() {
                if !real.is_empty() {
                    return Some(real);
                }
            }
        }
        self.banner.as_deref().filter(|b| !b.is_empty())
    }
}

/// Which banner column an upload targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Render3d,
    Real,
}

impl BannerKind {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "3d" => Some(BannerKind::Render3d),
            "real" => Some(BannerKind::Real),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            BannerKind::Render3d => "banner",
            BannerKind::Real => "banner_real",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            BannerKind::Render3d => "3d",
            BannerKind::Real => "real",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConcluidaForm {
    pub concluida: bool,
}

/// Visitor-facing view: only the banner that should be displayed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObraResumo {
    pub id: String,
    pub nome: String,
    pub slug: String,
    pub descricao: Option<String>,
    pub banner_url: Option<String>,
    pub concluida: bool,
}

impl From<Obra> for ObraResumo {
    fn from(obra: Obra) -> Self {
        let banner_url = obra.display_banner().map(|s| s.to_string());
        ObraResumo {
            id: obra.id,
            nome: obra.nome,
            slug: obra.slug,
            descricao: obra.descricao,
            banner_url,
            concluida: obra.concluida,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obra(concluida: bool, banner: Option<&str>, banner_real: Option<&str>) -> Obra {
        Obra {
            id: "o1".to_string(),
            nome: "Residencial Aurora".to_string(),
            slug: "residencial-aurora".to_string(),
            descricao: None,
            banner: banner.map(|s| s.to_string()),
            banner_real: banner_real.map(|s| s.to_string()),
            concluida,
            created_at: 0,
        }
    }

    #[test]
    fn in_progress_obra_shows_render() {
        let o = obra(false, Some("/3d.png"), Some("/real.png"));
        assert_eq!(o.display_banner(), Some("/3d.png"));
    }

    #[test]
    fn finished_obra_prefers_real_photo() {
        let o = obra(true, Some("/3d.png"), Some("/real.png"));
        assert_eq!(o.display_banner(), Some("/real.png"));
    }

    #[test]
    fn finished_obra_without_real_photo_falls_back() {
        let o = obra(true, Some("/3d.png"), None);
        assert_eq!(o.display_banner(), Some("/3d.png"));
        let o = obra(true, Some("/3d.png"), Some(""));
        assert_eq!(o.display_banner(), Some("/3d.png"));
    }

    #[test]
    fn banner_kind_parses_known_params_only() {
        assert_eq!(BannerKind::from_param("3d"), Some(BannerKind::Render3d));
        assert_eq!(BannerKind::from_param("real"), Some(BannerKind::Real));
        assert_eq!(BannerKind::from_param("other"), None);
    }
}
