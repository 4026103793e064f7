//! tests/state_tests.rs
//! Pruebas del store compartido de estado de campaña.

#[cfg(test)]
mod tests {
    use crate::models::campaign_model::EmailOutcome;
    use crate::models::lead_model::LeadRecord;
    use crate::state::CampaignStore;

    fn lead(email: &str) -> LeadRecord {
        LeadRecord::from_pairs(&[("Email", email)])
    }

    #[test]
    fn test_new_store_starts_empty() {
        let store = CampaignStore::new();
        assert_eq!(store.lead_count(), 0);
        assert!(store.outcomes().is_empty());
        assert_eq!(store.stats(), Default::default());
    }

    #[test]
    fn test_replace_leads_resets_total_only() {
        let store = CampaignStore::new();
        store.commit_run(vec![EmailOutcome::sent("a@x.com")], 1, 0);

        store.replace_leads(vec![lead("b@x.com"), lead("c@x.com")]);

        let stats = store.stats();
        assert_eq!(stats.total_leads, 2);
        // Los resultados de la campaña anterior sobreviven a la carga.
        assert_eq!(stats.successful, 1);
        assert_eq!(stats.emails_sent, 1);
        assert_eq!(store.outcomes().len(), 1);
    }

    #[test]
    fn test_commit_run_overwrites_previous_results() {
        let store = CampaignStore::new();
        store.replace_leads(vec![lead("a@x.com"), lead("b@x.com"), lead("c@x.com")]);

        store.commit_run(
            vec![
                EmailOutcome::sent("a@x.com"),
                EmailOutcome::sent("b@x.com"),
                EmailOutcome::sent("c@x.com"),
            ],
            3,
            0,
        );
        store.commit_run(
            vec![
                EmailOutcome::sent("a@x.com"),
                EmailOutcome::failed("b@x.com", "buzón lleno"),
            ],
            1,
            1,
        );

        // El segundo commit descarta por completo al primero.
        let outcomes = store.outcomes();
        assert_eq!(outcomes.len(), 2);

        let stats = store.stats();
        assert_eq!(stats.emails_sent, 2);
        assert_eq!(stats.successful, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total_leads, 3, "total_leads lo fija la ingesta");
        assert_eq!(stats.successful + stats.failed, outcomes.len());
    }

    #[test]
    fn test_leads_returns_a_snapshot() {
        let store = CampaignStore::new();
        store.replace_leads(vec![lead("a@x.com")]);

        let snapshot = store.leads();
        store.replace_leads(vec![lead("b@x.com"), lead("c@x.com")]);

        // La copia tomada antes del reemplazo no cambia.
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.lead_count(), 2);
    }
}
