use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Etapa {
    pub id: String,
    pub obra_id: String,
    pub nome: String,
    pub percentual: i32,
}

#[derive(Debug, Deserialize)]
pub struct PercentualForm {
    pub percentual: i32,
}

/// Overall progress of an obra: mean of its stage percentages, rounded.
/// Half values round up (away from zero is the same thing on 0..=100).
pub fn progresso_geral(etapas: &[Etapa]) -> i32 {
    if etapas.is_empty() {
        return 0;
    }
    let soma: i64 = etapas.iter().map(|e| i64::from(e.percentual)).sum();
    (soma as f64 / etapas.len() as f64).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn etapa(percentual: i32) -> Etapa {
        Etapa {
            id: "e".to_string(),
            obra_id: "o".to_string(),
            nome: "Fundação".to_string(),
            percentual,
        }
    }

    #[test]
    fn no_etapas_means_zero_progress() {
        assert_eq!(progresso_geral(&[]), 0);
    }

    #[test]
    fn averages_and_rounds() {
        assert_eq!(progresso_geral(&[etapa(100)]), 100);
        assert_eq!(progresso_geral(&[etapa(10), etapa(20), etapa(30)]), 20);
        // 50/3 = 16.66.. -> 17
        assert_eq!(progresso_geral(&[etapa(50), etapa(0), etapa(0)]), 17);
    }

    #[test]
    fn half_rounds_up() {
        // (10 + 25) / 2 = 17.5 -> 18
        assert_eq!(progresso_geral(&[etapa(10), etapa(25)]), 18);
    }
}
