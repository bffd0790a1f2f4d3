//! Evolution-chain resolution
//!
//! Only the first successor of each node is followed. Species that branch
//! (eevee, tyrogue, ...) always resolve to their first listed evolution.

use crate::catalog::ChainLink;

/// Species name that `name` evolves into, walking from `root`
///
/// Returns `None` when the chain has no successors at all, when `name`
/// is not on the first-successor path, or when its node is a final form.
/// The first node whose species matches ends the walk.
pub fn next_evolution<'a>(root: &'a ChainLink, name: &str) -> Option<&'a str> {
    if !root.has_successor() {
        return None;
    }

    root.first_branch()
        .find(|link| link.species.name == name)?
        .first_successor()
        .map(|next| next.species.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::test_support::linear_chain;
    use serde_json::json;

    fn chain(value: serde_json::Value) -> ChainLink {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_base_form_evolves_to_next_stage() {
        let root = chain(linear_chain(&["bulbasaur", "ivysaur", "venusaur"]));
        assert_eq!(next_evolution(&root, "bulbasaur"), Some("ivysaur"));
    }

    #[test]
    fn test_middle_stage_evolves_to_final_stage() {
        let root = chain(linear_chain(&["bulbasaur", "ivysaur", "venusaur"]));
        assert_eq!(next_evolution(&root, "ivysaur"), Some("venusaur"));
    }

    #[test]
    fn test_final_form_has_no_evolution() {
        let root = chain(linear_chain(&["bulbasaur", "ivysaur", "venusaur"]));
        assert_eq!(next_evolution(&root, "venusaur"), None);
    }

    #[test]
    fn test_single_node_chain() {
        let root = chain(linear_chain(&["mewtwo"]));
        assert_eq!(next_evolution(&root, "mewtwo"), None);
    }

    #[test]
    fn test_name_not_in_chain() {
        let root = chain(linear_chain(&["charmander", "charmeleon", "charizard"]));
        assert_eq!(next_evolution(&root, "pikachu"), None);
    }

    #[test]
    fn test_branching_takes_first_successor() {
        let root = chain(json!({
            "species": { "name": "eevee" },
            "evolves_to": [
                { "species": { "name": "vaporeon" } },
                { "species": { "name": "jolteon" } },
                { "species": { "name": "flareon" } }
            ]
        }));

        assert_eq!(next_evolution(&root, "eevee"), Some("vaporeon"));
        // Alternative branches are never walked
        assert_eq!(next_evolution(&root, "jolteon"), None);
    }

    #[test]
    fn test_walk_ignores_nodes_off_the_first_branch() {
        let root = chain(json!({
            "species": { "name": "oddish" },
            "evolves_to": [
                {
                    "species": { "name": "gloom" },
                    "evolves_to": [
                        { "species": { "name": "vileplume" } },
                        { "species": { "name": "bellossom" } }
                    ]
                }
            ]
        }));

        assert_eq!(next_evolution(&root, "gloom"), Some("vileplume"));
        assert_eq!(next_evolution(&root, "bellossom"), None);
    }
}
