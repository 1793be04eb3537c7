use skyvoyage::admin::{self, DestinationDraft, OfferDraft};
use skyvoyage::fetch::FetchOptions;

fn offer() -> OfferDraft {
    OfferDraft {
        title: "Autumn Sale".into(),
        description: "Fares to Europe".into(),
        discount: "20%".into(),
        code: "AUTUMN20".into(),
        expiry: "2026-11-30".into(),
    }
}

fn destination() -> DestinationDraft {
    DestinationDraft {
        name: "Rome".into(),
        country: "Italy".into(),
        price: "$399".into(),
        image_url: "https://img.skyvoyage.example/rome.jpg".into(),
    }
}

#[test]
fn complete_drafts_validate() {
    assert!(offer().validate().is_ok());
    assert!(destination().validate().is_ok());
}

#[test]
fn offer_requires_every_field() {
    let mut draft = offer();
    draft.code = "  ".into();
    assert_eq!(draft.validate().unwrap_err().to_string(), "code is required");
}

#[test]
fn offer_expiry_must_be_a_date() {
    let mut draft = offer();
    draft.expiry = "2026-02-30".into();
    assert!(draft.validate().unwrap_err().to_string().contains("YYYY-MM-DD"));
}

#[test]
fn destination_requires_country() {
    let mut draft = destination();
    draft.country = String::new();
    assert_eq!(draft.validate().unwrap_err().to_string(), "country is required");
}

#[tokio::test]
async fn create_offer_confirms() {
    let message = admin::create_offer(&offer(), &FetchOptions::instant())
        .await
        .unwrap();
    assert_eq!(
        message,
        "Offer Created: New offer \"Autumn Sale\" has been added successfully."
    );
}

#[tokio::test]
async fn add_destination_confirms() {
    let message = admin::add_destination(&destination(), &FetchOptions::instant())
        .await
        .unwrap();
    assert_eq!(
        message,
        "Destination Added: New destination \"Rome, Italy\" has been added successfully."
    );
}

#[tokio::test]
async fn invalid_draft_is_not_submitted() {
    let draft = OfferDraft::default();
    assert!(admin::create_offer(&draft, &FetchOptions::instant()).await.is_err());
}
