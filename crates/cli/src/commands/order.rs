//! `larek-cli order`
//!
//! Runs the same coordinator the storefront uses, feeding it the events a
//! customer would produce by clicking through the modal.

use std::sync::{Arc, Mutex};

use clap::Args;
use larek_core::{OrderId, PaymentMethod, Price, Product, ProductId};
use larek_storefront::api::LarekApi;
use larek_storefront::checkout::{Coordinator, Screen, StoreEvent, StoreEventKind, UiEvent};

use super::{CliError, client};

/// Arguments for `larek-cli order`.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Product id to put in the cart (repeatable)
    #[arg(short, long = "product", required = true)]
    pub products: Vec<String>,

    /// Payment method (`card` or `cash`)
    #[arg(long)]
    pub payment: String,

    /// Delivery address
    #[arg(long)]
    pub address: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Contact phone
    #[arg(long)]
    pub phone: String,

    /// Validate and print the order body without submitting it
    #[arg(long)]
    pub dry_run: bool,
}

/// What an order run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// The order API accepted the order.
    Placed { id: OrderId, charged: Price },
    /// Dry run: the JSON body that would have been sent.
    Validated { body: String },
}

/// Place an order against the configured API and print the result.
#[allow(clippy::print_stdout)]
pub async fn run(args: &OrderArgs) -> Result<(), CliError> {
    match place(client()?, args).await? {
        OrderOutcome::Placed { id, charged } => {
            println!("Order {id} placed. Charged {}", charged.display());
        }
        OrderOutcome::Validated { body } => println!("{body}"),
    }
    Ok(())
}

/// Drive a coordinator through checkout.
///
/// # Errors
///
/// Fails on an unknown or priceless product, an invalid payment method, any
/// validation error, or the order call itself.
pub async fn place<A: LarekApi>(api: A, args: &OrderArgs) -> Result<OrderOutcome, CliError> {
    let method = PaymentMethod::parse(&args.payment)?;

    let mut coordinator = Coordinator::new(api);
    let placed = Arc::new(Mutex::new(None));
    {
        let placed = Arc::clone(&placed);
        let bus = coordinator.bus_mut();
        bus.subscribe(StoreEventKind::CartChanged, |event: &StoreEvent| {
            if let StoreEvent::CartChanged { count, total } = event {
                tracing::info!(count, total = %total, "Cart updated");
            }
        });
        bus.subscribe(StoreEventKind::OrderPlaced, move |event: &StoreEvent| {
            if let StoreEvent::OrderPlaced { id, .. } = event
                && let Ok(mut slot) = placed.lock()
            {
                *slot = Some(id.clone());
            }
        });
    }

    let count = coordinator.load_catalog().await?;
    tracing::debug!(count, "Catalog loaded");

    for raw in &args.products {
        let id = ProductId::new(raw.as_str());
        match coordinator.catalog().find(&id).map(Product::is_purchasable) {
            None => return Err(CliError::UnknownProduct(raw.clone())),
            Some(false) => return Err(CliError::NotPurchasable(raw.clone())),
            Some(true) => coordinator.dispatch(UiEvent::AddToCart(id)).await?,
        }
    }

    coordinator.dispatch(UiEvent::CartOpened).await?;
    coordinator.dispatch(UiEvent::CheckoutRequested).await?;
    coordinator
        .dispatch(UiEvent::PaymentMethodSelected(method))
        .await?;
    coordinator
        .dispatch(UiEvent::PaymentSubmitted {
            address: args.address.clone(),
        })
        .await?;

    if args.dry_run {
        coordinator
            .dispatch(UiEvent::ContactInput {
                email: args.email.clone(),
                phone: args.phone.clone(),
            })
            .await?;
        let request = coordinator
            .draft()
            .to_request(coordinator.cart())
            .map_err(larek_storefront::checkout::CheckoutError::from)?;
        return Ok(OrderOutcome::Validated {
            body: serde_json::to_string_pretty(&request)?,
        });
    }

    coordinator
        .dispatch(UiEvent::ContactSubmitted {
            email: args.email.clone(),
            phone: args.phone.clone(),
        })
        .await?;

    let charged = match coordinator.modal().screen() {
        Some(Screen::Success { total }) => *total,
        _ => Price::ZERO,
    };
    let id = placed
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .unwrap_or_else(|| OrderId::new("unknown"));

    Ok(OrderOutcome::Placed { id, charged })
}
