//! Property tests for aspendos-decision.

use proptest::prelude::*;

use aspendos_core::config::DecisionConfig;
use aspendos_core::constants::MAX_SECTORS;
use aspendos_core::query::QueryType;
use aspendos_core::RetryStrategy;
use aspendos_decision::sectors::base_sectors;
use aspendos_decision::{classify_query, reflect_on_response, select_sectors, DecisionAgent};
use test_fixtures::ScriptedGenerator;

fn any_query_type() -> impl Strategy<Value = QueryType> {
    prop::sample::select(QueryType::ALL.to_vec())
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

const CUES: &[&str] = &[
    "yesterday",
    "remember when",
    "I feel",
    "so stressed",
    "how do I",
    "step by step",
    "my workflow",
    "earlier",
];

// Personal pronouns always win over general knowledge.
proptest! {
    #[test]
    fn prop_pronoun_overrides_general_knowledge(
        lead in prop::sample::select(vec!["What is", "Who was", "Where are", "When did"]),
        pronoun in prop::sample::select(vec!["my", "me", "I", "we", "our", "mine"]),
        noun in "[a-z]{4,10}",
    ) {
        let query = format!("{lead} {pronoun} {noun}?");
        prop_assert_ne!(classify_query(&query), QueryType::GeneralKnowledge);
    }
}

// Sectors are bounded, unique, and base-first.
proptest! {
    #[test]
    fn prop_sectors_bounded_unique_base_first(
        query_type in any_query_type(),
        cues in prop::sample::subsequence(CUES.to_vec(), 0..=CUES.len()),
        filler in "[a-z ]{0,40}",
    ) {
        let query = format!("{filler} {}", cues.join(" "));
        let sectors = select_sectors(&query, query_type);

        prop_assert!(sectors.len() <= MAX_SECTORS);
        for (i, s) in sectors.iter().enumerate() {
            prop_assert!(!sectors[i + 1..].contains(s));
        }
        let base = base_sectors(query_type);
        let prefix = base.len().min(sectors.len());
        prop_assert_eq!(&sectors[..prefix], &base[..prefix]);
    }
}

// Short responses are never satisfying.
proptest! {
    #[test]
    fn prop_short_response_unsatisfied(
        query in ".{0,80}",
        response in ".{0,50}",
        memory_used in any::<bool>(),
    ) {
        prop_assume!(response.chars().count() <= 50);
        let r = reflect_on_response(&query, &response, memory_used);
        prop_assert!(!r.satisfied);
        prop_assert_eq!(r.retry_strategy, Some(RetryStrategy::RequestMoreDetail));
    }
}

// Known query types route deterministically with no model call.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn prop_known_type_is_deterministic(
        query_type in any_query_type(),
        query in "[A-Za-z ?]{0,60}",
    ) {
        prop_assume!(query_type != QueryType::Unknown);
        let rt = runtime();
        let agent = DecisionAgent::new(ScriptedGenerator::failing("unused"), DecisionConfig::default());

        let first = rt.block_on(agent.decide_memory_usage(&query, Some(query_type)));
        let second = rt.block_on(agent.decide_memory_usage(&query, Some(query_type)));

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(agent.generator().calls(), 0);
    }
}
