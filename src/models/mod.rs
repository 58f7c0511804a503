pub mod diferencial;
pub mod etapa;
pub mod foto;
pub mod obra;
pub mod pagina;
pub mod site_content;
