// Copyright (c) 2025 - Cowboy AI, Inc.
//! Properties of wire → domain conversion

use proptest::prelude::*;
use proptest::sample::subsequence;

use ovirt_client::domain::{convert_list, FromWire, Network, NetworkData, VlanId};
use ovirt_client::errors::ErrorKind;
use ovirt_client::MockClient;

use crate::fixtures::{network_wire, DATACENTER_ID, NETWORK_ID};

const MANDATORY: [&str; 3] = ["id", "name", "data_center"];
const OPTIONAL: [&str; 3] = ["description", "comment", "vlan"];

proptest! {
    /// Property: Any missing mandatory key fails the conversion
    #[test]
    fn prop_missing_mandatory_field_is_field_missing(
        removed in subsequence(MANDATORY.to_vec(), 1..=MANDATORY.len())
    ) {
        let wire = removed
            .iter()
            .fold(network_wire(NETWORK_ID, DATACENTER_ID), |wire, key| wire.without(key));

        let err = NetworkData::from_wire(&wire).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::FieldMissing);
    }

    /// Property: Absent optional keys take their defaults, present ones are kept
    #[test]
    fn prop_optional_fields_default(
        removed in subsequence(OPTIONAL.to_vec(), 0..=OPTIONAL.len())
    ) {
        let wire = removed
            .iter()
            .fold(network_wire(NETWORK_ID, DATACENTER_ID), |wire, key| wire.without(key));

        let data = NetworkData::from_wire(&wire).unwrap();

        let expected_description = if removed.contains(&"description") { "" } else { "storage backbone" };
        let expected_vlan = if removed.contains(&"vlan") { None } else { Some(VlanId::new(120).unwrap()) };
        prop_assert_eq!(data.description.as_str(), expected_description);
        prop_assert_eq!(data.comment.as_str(), "");
        prop_assert_eq!(data.vlan, expected_vlan);
        prop_assert_eq!(data.id.as_str(), NETWORK_ID);
    }

    /// Property: One malformed listing item fails the listing and names its index
    #[test]
    fn prop_bad_listing_item_names_index((len, bad) in (1usize..20).prop_flat_map(|len| (Just(len), 0..len))) {
        let items: Vec<_> = (0..len)
            .map(|index| {
                let wire = network_wire(&format!("network-{}", index), DATACENTER_ID);
                if index == bad { wire.without("name") } else { wire }
            })
            .collect();
        let client = MockClient::new().handle();

        let err = convert_list::<Network>(&items, &client).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Bug);
        let expected = format!("listing item #{}", bad);
        prop_assert!(err.to_string().ends_with(&expected), "{} should end with {}", err, expected);
    }

    /// Property: Well-formed listings convert element by element, in order
    #[test]
    fn prop_listing_preserves_order(len in 0usize..20) {
        let items: Vec<_> = (0..len)
            .map(|index| network_wire(&format!("network-{}", index), DATACENTER_ID))
            .collect();
        let client = MockClient::new().handle();

        let networks = convert_list::<Network>(&items, &client).unwrap();

        prop_assert_eq!(networks.len(), len);
        for (index, network) in networks.iter().enumerate() {
            prop_assert_eq!(network.id.as_str(), format!("network-{}", index));
        }
    }
}
