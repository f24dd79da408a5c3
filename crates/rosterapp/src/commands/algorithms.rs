use crate::commands::{AlgorithmInfo, CmdResult};
use crate::search::SearchMethod;
use crate::sort::SortMethod;

/// The complexity table: every search method, then every sort method.
pub fn run() -> CmdResult {
    let searches = SearchMethod::all().iter().map(|m| AlgorithmInfo {
        name: format!("{} search", m),
        complexity: m.complexity(),
    });
    let sorts = SortMethod::all().iter().map(|m| AlgorithmInfo {
        name: format!("{} sort", m),
        complexity: m.complexity(),
    });
    CmdResult {
        algorithms: searches.chain(sorts).collect(),
        ..Default::default()
    }
}
