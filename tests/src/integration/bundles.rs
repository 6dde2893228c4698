//! Bundle-path tests: wire-format bundles through the build surface, and
//! refund resolution across nested bundle shapes.

#[cfg(test)]
mod tests {
    use crate::fixtures::{random_hash, sample_attributes, CountingEngine, FakeChain, StaticSender};
    use builder_api::{BlockBuildCoordinator, BlockBuilderApi, BuilderApiError, BuilderConfig};
    use builder_types::{
        resolve_refund_config, Address, BuildBlockArgs, Bundle, BundleBody, BundleError,
        BundleInclusion, BundleValidity, RefundConfig, RpcBundle, Transaction,
    };
    use std::sync::Arc;

    fn plain_bundle(body: Vec<BundleBody>) -> Bundle {
        Bundle::new(BundleInclusion::default(), body, BundleValidity::default())
    }

    async fn coordinator_at_slot(
        slot: u64,
        engine: Arc<CountingEngine>,
    ) -> BlockBuildCoordinator {
        let head = random_hash();
        let coordinator = BlockBuildCoordinator::new(
            BuilderConfig::default(),
            FakeChain::with_blocks(&[head]),
            engine,
        );
        coordinator
            .store()
            .accept(sample_attributes(slot, head))
            .await
            .unwrap();
        coordinator
    }

    #[tokio::test]
    async fn test_wire_bundle_reaches_engine_with_authoritative_args() {
        let engine = CountingEngine::new();
        let coordinator = coordinator_at_slot(8, Arc::clone(&engine)).await;

        // A bundle exactly as an external caller would submit it.
        let bundle: RpcBundle = serde_json::from_str(
            r#"{"blockNumber":"0x1b4","txs":["0x02f870","0x02f871"],"percent":90}"#,
        )
        .unwrap();
        assert_eq!(bundle.refund_percent, Some(90));

        let envelope = coordinator
            .build_block_from_bundles(
                BuildBlockArgs { slot: 9_999, parent: random_hash(), ..Default::default() },
                vec![bundle],
            )
            .await
            .unwrap();

        let sent = engine.last_args().unwrap();
        assert_eq!(sent.slot, 8);
        assert_eq!(envelope.execution_payload.block_number, 8);
        assert_eq!(coordinator.metrics().get_blocks_built(), 1);
    }

    #[tokio::test]
    async fn test_bundle_policy_error_surfaces_at_the_build_boundary() {
        let engine =
            CountingEngine::failing(BuilderApiError::Bundle(BundleError::IncorrectRefundConfig));
        let coordinator = coordinator_at_slot(3, Arc::clone(&engine)).await;

        let err = coordinator
            .build_block_from_bundles(BuildBlockArgs::default(), vec![RpcBundle::default()])
            .await
            .unwrap_err();

        assert_eq!(err, BuilderApiError::Bundle(BundleError::IncorrectRefundConfig));
        assert_eq!(engine.call_count(), 1);
        assert_eq!(coordinator.metrics().get_build_failures(), 1);
        assert_eq!(coordinator.metrics().get_blocks_built(), 0);
    }

    #[test]
    fn test_nested_bundle_hash_and_refund_agree_on_the_first_element() {
        // An inner bundle wrapped once: the outer hash reduces to the inner
        // hash, and refund resolution lands on the inner first transaction.
        let first = Transaction::from_raw(vec![0x01; 16]);
        let inner = plain_bundle(vec![
            BundleBody::transaction(first.clone()),
            BundleBody::transaction(Transaction::from_raw(vec![0x02; 16])),
        ]);
        let inner_hash = inner.hash();

        let outer = plain_bundle(vec![BundleBody::bundle(inner)]);
        assert_eq!(outer.hash(), inner_hash);

        let sender = Address::repeat_byte(0x5e);
        let config =
            resolve_refund_config(&BundleBody::bundle(outer), &StaticSender(sender)).unwrap();
        assert_eq!(config, vec![RefundConfig { address: sender, percent: 100 }]);
    }

    #[test]
    fn test_explicit_refund_config_wins_over_recovery() {
        let explicit = vec![
            RefundConfig { address: Address::repeat_byte(0x0a), percent: 70 },
            RefundConfig { address: Address::repeat_byte(0x0b), percent: 30 },
        ];
        let bundle = Bundle::new(
            BundleInclusion::default(),
            vec![BundleBody::transaction(Transaction::from_raw(vec![0xff]))],
            BundleValidity { refund: vec![], refund_config: explicit.clone() },
        );
        assert_eq!(bundle.refund_percent(), Some(70));

        // The recovery port is available but must not be consulted.
        let config = resolve_refund_config(
            &BundleBody::bundle(bundle),
            &StaticSender(Address::repeat_byte(0xee)),
        )
        .unwrap();
        assert_eq!(config, explicit);
    }

    #[test]
    fn test_wire_bundle_transactions_hash_like_model_bundles() {
        // The same encoded transactions must produce the same bundle identity
        // whether they arrived over the wire or were assembled in-process.
        let json = r#"{"txs":["0xdead","0xbeef"]}"#;
        let wire: RpcBundle = serde_json::from_str(json).unwrap();

        let from_wire = plain_bundle(
            wire.txs.iter().cloned().map(BundleBody::transaction).collect(),
        );
        let assembled = plain_bundle(vec![
            BundleBody::transaction(Transaction::from_raw(vec![0xde, 0xad])),
            BundleBody::transaction(Transaction::from_raw(vec![0xbe, 0xef])),
        ]);

        assert_eq!(from_wire.hash(), assembled.hash());
    }
}
