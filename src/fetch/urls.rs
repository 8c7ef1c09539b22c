// src/fetch/urls.rs
use url::Url;

use crate::report::{subopcao, QueryTuple};

pub const DEFAULT_BASE_URL: &str = "http://vitibrasil.cnpuv.embrapa.br/index.php";

/// Report page URL for one tuple. Types with sub-categories carry `subopcao`;
/// the others never do.
pub fn report_url(base: &Url, tuple: &QueryTuple) -> Url {
    let mut url = base.clone();
    {
        let mut q = url.query_pairs_mut();
        q.append_pair("ano", &tuple.year.to_string())
            .append_pair("opcao", &tuple.report.opcao());
        if let Some(n) = tuple.sub_category {
            q.append_pair("subopcao", &subopcao(n));
        }
    }
    url
}
