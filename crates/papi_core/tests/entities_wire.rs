use papi_core::entities::addons::{
    AddonData, AddonDataScheme, AddonVersion, InstalledAddon, Relation, RelationType,
    SchemeFieldType, SchemeType,
};
use papi_core::entities::crawler::{CrawlerType, PagerCrawlerInput};
use papi_core::entities::data_index::UpdateByQueryResponse;
use papi_core::entities::page::{
    DataViewScreenSize, Page, PageConfigurationParameter, PageSizeType, SplitType,
};
use papi_core::entities::settings::AtdSettings;
use papi_core::EntityValidationError;
use serde_json::json;

const ADDON_UUID: &str = "50062e0c-9967-4ed4-9102-f2bc50602d41";

fn page_json() -> serde_json::Value {
    json!({
        "Key": "page-1",
        "Name": "Home",
        "Blocks": [{
            "Key": "block-1",
            "Relation": {
                "Type": "NgComponent",
                "AddonUUID": ADDON_UUID,
                "Name": "Gallery",
                "RelationName": "PageBlock",
                "SubType": "NG11",
                "ComponentName": "GalleryComponent",
                "ModuleName": "GalleryModule",
                "AddonRelativeURL": "gallery"
            },
            "Configuration": {
                "Resource": "Gallery",
                "AddonUUID": ADDON_UUID,
                "Data": { "Columns": 3 }
            },
            "PageConfiguration": {
                "Parameters": [
                    { "Type": "String", "Key": "title", "Mandatory": false, "Consume": true, "Produce": false },
                    { "Type": "Filter", "Key": "filter", "Mandatory": true, "Consume": true, "Produce": true,
                      "Resource": "accounts", "Fields": ["Name", "City"] }
                ]
            }
        }],
        "Layout": {
            "Sections": [{
                "Key": "section-1",
                "Height": 320.25,
                "Columns": [{ "BlockContainer": { "BlockKey": "block-1", "Hide": ["Phablet"] } }, {}],
                "Split": "1/3 2/3",
                "Hide": ["Tablet"]
            }],
            "VerticalSpacing": "md",
            "MaxWidth": 1200.5
        },
        "CustomFlag": true
    })
}

#[test]
fn page_decodes_host_shape_and_validates() {
    let page: Page = serde_json::from_value(page_json()).expect("page decodes");

    assert_eq!(page.blocks.len(), 1);
    assert_eq!(page.blocks[0].relation.kind, RelationType::NgComponent);
    let parameters = &page.blocks[0]
        .page_configuration
        .as_ref()
        .expect("page configuration")
        .parameters;
    assert!(matches!(parameters[0], PageConfigurationParameter::String(_)));
    match &parameters[1] {
        PageConfigurationParameter::Filter(filter) => {
            assert_eq!(filter.resource, "accounts");
            assert_eq!(filter.fields, vec!["Name", "City"]);
            assert!(filter.base.mandatory);
        }
        other => panic!("unexpected parameter: {other:?}"),
    }
    assert_eq!(page.layout.sections[0].split, Some(SplitType::ThirdTwoThirds));
    assert_eq!(
        page.layout.sections[0].hide,
        Some(vec![DataViewScreenSize::Tablet])
    );
    assert_eq!(page.layout.vertical_spacing, Some(PageSizeType::Md));
    assert_eq!(page.layout.max_width, Some(1200.5));
    assert_eq!(page.layout.sections[0].height, Some(320.25));
    assert_eq!(page.extra.get("CustomFlag"), Some(&json!(true)));
    page.validate().expect("page is consistent");

    assert_eq!(serde_json::to_value(&page).unwrap(), page_json());
}

#[test]
fn page_rejects_container_pointing_at_missing_block() {
    let mut value = page_json();
    value["Layout"]["Sections"][0]["Columns"][0]["BlockContainer"]["BlockKey"] = json!("ghost");
    let page: Page = serde_json::from_value(value).expect("page decodes");

    assert_eq!(
        page.validate().unwrap_err(),
        EntityValidationError::UnknownReference {
            field: "BlockContainer.BlockKey",
            value: "ghost".to_string(),
        }
    );
}

#[test]
fn addon_data_keeps_unknown_columns() {
    let value = json!({ "Key": "row-1", "Hidden": false, "Price": 9.5, "Tags": ["a"] });
    let data: AddonData = serde_json::from_value(value.clone()).expect("addon data decodes");

    assert_eq!(data.key.as_deref(), Some("row-1"));
    assert_eq!(data.extra.get("Price"), Some(&json!(9.5)));
    assert_eq!(serde_json::to_value(&data).unwrap(), value);
}

#[test]
fn installed_addon_and_version_use_host_names() {
    let installed: InstalledAddon = serde_json::from_value(json!({
        "Addon": { "UUID": ADDON_UUID, "Name": "Pages", "Type": 1, "SystemData": { "Editors": [] } },
        "Version": "1.0.34",
        "UUID": "c9e3b3e0-1c55-4a6f-9e8b-3b8e3f0d8c21"
    }))
    .expect("installed addon decodes");
    assert_eq!(installed.addon.kind, Some(1));
    assert_eq!(installed.version.as_deref(), Some("1.0.34"));

    let version: AddonVersion = serde_json::from_value(json!({
        "Version": "1.0.34",
        "AddonUUID": ADDON_UUID,
        "Phased": true,
        "StartPhasedDateTime": "2021-06-01T00:00:00Z"
    }))
    .expect("addon version decodes");
    version.validate().expect("valid version");
    let encoded = serde_json::to_value(&version).unwrap();
    assert_eq!(encoded["AddonUUID"], ADDON_UUID);
    assert!(encoded.get("Hidden").is_none());
}

#[test]
fn data_scheme_types_use_host_spelling() {
    let scheme: AddonDataScheme = serde_json::from_value(json!({
        "Name": "Pages",
        "Type": "cpi_meta_data",
        "Fields": { "Title": { "Type": "String" }, "Tags": { "Type": "MultipleStringValues" } }
    }))
    .expect("scheme decodes");
    assert_eq!(scheme.kind, Some(SchemeType::CpiMetaData));
    let fields = scheme.fields.expect("fields");
    assert_eq!(fields["Tags"].kind, SchemeFieldType::MultipleStringValues);
}

#[test]
fn relation_addon_api_type_round_trips() {
    let relation: Relation = serde_json::from_value(json!({
        "Type": "AddonAPI",
        "AddonUUID": ADDON_UUID,
        "Name": "Sync",
        "RelationName": "SyncHandler",
        "AddonRelativeURL": "/api/sync",
        "Priority": 2
    }))
    .expect("relation decodes");
    assert_eq!(relation.kind, RelationType::AddonApi);
    assert_eq!(relation.extra.get("Priority"), Some(&json!(2)));
    relation.validate().expect("valid relation");
    assert_eq!(serde_json::to_value(&relation).unwrap()["Type"], "AddonAPI");
}

#[test]
fn pager_crawler_input_requires_pager_type() {
    let input: PagerCrawlerInput = serde_json::from_value(json!({
        "Name": "crawl-accounts",
        "PagerRelativeURL": "/addon-api/pager",
        "Type": "Pager",
        "PagerData": { "PageSize": 100 }
    }))
    .expect("crawler input decodes");
    assert_eq!(input.kind, CrawlerType::Pager);
    input.validate().expect("valid crawler input");

    let err = serde_json::from_value::<PagerCrawlerInput>(json!({
        "Name": "crawl-accounts",
        "PagerRelativeURL": "/addon-api/pager",
        "Type": "Scheduled",
        "PagerData": {}
    }));
    assert!(err.is_err());
}

#[test]
fn atd_settings_decode_mixed_case_fields() {
    let option = json!({ "ID": "1", "Name": "Default" });
    let accounts = json!({ "IDs": ["10"], "Label": "Stores", "AllTypes": false, "UserAccount": true });
    let settings: AtdSettings = serde_json::from_value(json!({
        "Icon": "icon1",
        "ShowOrderDetails": true,
        "SearchAll": false,
        "ShareOrder": true,
        "MainAction": option,
        "OrderView": option,
        "InventoryLimitation": option,
        "CaseQuantityLimitation": option,
        "Type": option,
        "EPayment": null,
        "OriginAccountsData": accounts,
        "DestinationAccountsData": accounts,
        "TransactionItemsScopeFilterID": "f-1",
        "TransactionLinesFilter": {
            "AdvancedFormula": false,
            "formula": "",
            "participatingAPINames": ["ItemPrice"]
        }
    }))
    .expect("settings decode");

    assert_eq!(settings.kind.name, "Default");
    assert_eq!(settings.origin_accounts_data.ids, vec!["10"]);
    assert_eq!(
        settings.transaction_lines_filter.participating_api_names,
        vec!["ItemPrice"]
    );
}

#[test]
fn update_by_query_response_decodes_engine_keys() {
    let response: UpdateByQueryResponse = serde_json::from_value(json!({
        "took": 147,
        "timed_out": false,
        "total": 5,
        "updated": 5,
        "deleted": 0,
        "batches": 1,
        "version_conflicts": 0,
        "noops": 0,
        "retries": { "bulk": 0, "search": 0 },
        "throttled_millis": 0,
        "requests_per_second": -1.0,
        "throttled_until_millis": 0,
        "failures": []
    }))
    .expect("response decodes");
    assert_eq!(response.updated, 5);
    assert_eq!(response.requests_per_second, -1.0);
    assert!(response.failures.is_empty());
}
