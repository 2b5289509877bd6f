//! End-to-end pricing of a product page: discount, customization,
//! quantity, installments, bundles and the resulting cart events.

use bakery_commerce::prelude::*;

fn brl(units: i64) -> Money {
    Money::from_units(units, Currency::BRL)
}

fn discounted_cake() -> Product {
    Product::new("bolo-morango", "Bolo de Morango", ProductCategory::Cake, brl(120))
        .with_discount(brl(120), 25)
        .unwrap()
        .with_installments(12)
        .unwrap()
}

fn customized(groups: &CustomizationGroups) -> Selection {
    let mut selection = Selection::new();
    selection.select_size(groups, &OptionId::new("m")).unwrap();
    selection.select_flavor(groups, &OptionId::new("red-velvet")).unwrap();
    selection.toggle_decoration(groups, &OptionId::new("simples")).unwrap();
    selection.toggle_extra(groups, &OptionId::new("morangos")).unwrap();
    selection.toggle_extra(groups, &OptionId::new("calda")).unwrap();
    selection.set_quantity(2);
    selection
}

#[test]
fn discounted_cake_with_customizations() {
    let product = discounted_cake();
    let groups = CustomizationGroups::for_category(product.category, product.currency());
    let selection = customized(&groups);

    assert_eq!(effective_unit_price(&product), brl(90));
    assert_eq!(savings(&product), brl(30));
    assert_eq!(installment_amount(&product).display(), "R$ 7,50");
    assert_eq!(customization_total(&selection, Currency::BRL).unwrap(), brl(38));
    assert_eq!(final_price(&product, &selection).unwrap(), brl(256));

    let breakdown = price_breakdown(&product, &selection).unwrap();
    assert!(breakdown.has_discount());
    assert_eq!(breakdown.original_price, Some(brl(120)));
    assert_eq!(breakdown.unit_total, brl(128));
    assert_eq!(breakdown.quantity, 2);
    assert_eq!(breakdown.final_price.display(), "R$ 256,00");
    let plan = breakdown.installments.unwrap();
    assert_eq!(plan.count, 12);
    assert_eq!(plan.amount, Money::new(750, Currency::BRL));
}

#[test]
fn final_price_scales_with_quantity() {
    let product = discounted_cake();
    let groups = CustomizationGroups::for_category(product.category, product.currency());
    let mut selection = customized(&groups);

    selection.set_quantity(1);
    let single = final_price(&product, &selection).unwrap();
    for quantity in 2..=MAX_QUANTITY {
        selection.set_quantity(quantity);
        assert_eq!(
            final_price(&product, &selection).unwrap(),
            single * i64::from(quantity)
        );
    }
}

#[test]
fn checkout_gated_on_size_and_flavor() {
    let product = discounted_cake();
    let groups = CustomizationGroups::for_category(product.category, product.currency());
    let mut selection = Selection::new();

    assert!(!can_checkout(&product, &groups, &selection));
    selection.select_size(&groups, &OptionId::new("p")).unwrap();
    assert!(!can_checkout(&product, &groups, &selection));
    selection.select_flavor(&groups, &OptionId::new("chocolate")).unwrap();
    assert!(can_checkout(&product, &groups, &selection));

    let unavailable = product.clone().with_availability(false);
    assert!(!can_checkout(&unavailable, &groups, &selection));
}

#[test]
fn selecting_the_same_option_twice_is_idempotent() {
    let product = discounted_cake();
    let groups = CustomizationGroups::for_category(product.category, product.currency());
    let mut selection = Selection::new();

    selection.select_size(&groups, &OptionId::new("g")).unwrap();
    let once = selection.clone();
    selection.select_size(&groups, &OptionId::new("g")).unwrap();
    assert_eq!(selection, once);
}

#[test]
fn toggling_twice_restores_the_selection() {
    let product = discounted_cake();
    let groups = CustomizationGroups::for_category(product.category, product.currency());
    let mut selection = customized(&groups);
    let before = selection.clone();

    selection.toggle_extra(&groups, &OptionId::new("vela")).unwrap();
    selection.toggle_extra(&groups, &OptionId::new("vela")).unwrap();
    selection.toggle_decoration(&groups, &OptionId::new("flores")).unwrap();
    selection.toggle_decoration(&groups, &OptionId::new("simples")).unwrap();
    assert_eq!(selection, before);
}

#[test]
fn rejected_actions_leave_the_price_unchanged() {
    let product = discounted_cake();
    let groups = CustomizationGroups::for_category(product.category, product.currency());
    let mut selection = customized(&groups);
    let before = final_price(&product, &selection).unwrap();

    assert!(selection.select_size(&groups, &OptionId::new("gigante")).is_err());
    assert!(selection.toggle_extra(&groups, &OptionId::new("ouro")).is_err());
    selection.set_quantity(10);
    assert!(selection.increment_quantity().is_err());
    assert_eq!(selection.quantity().get(), MAX_QUANTITY);

    selection.set_quantity(2);
    assert_eq!(final_price(&product, &selection).unwrap(), before);
}

#[test]
fn bundle_of_three() {
    let primary = Product::new("bolo", "Bolo", ProductCategory::Cake, brl(50));
    let mut bundle = BundleSelection::new(primary);
    bundle.offer(
        Product::new("brigadeiro", "Brigadeiros", ProductCategory::Sweet, brl(20)),
        true,
    );
    bundle.offer(
        Product::new("torta", "Torta de Limão", ProductCategory::Pie, brl(30)),
        true,
    );

    let totals = bundle.totals(&PricingConfig::default()).unwrap();
    assert_eq!(totals.original_total, brl(100));
    assert_eq!(totals.discounted_total, brl(90));
    assert_eq!(totals.savings, brl(10));

    bundle.toggle(&ProductId::new("torta"));
    let totals = bundle.totals(&PricingConfig::default()).unwrap();
    assert_eq!(totals.original_total, brl(70));
    assert_eq!(totals.item_count, 2);
}

#[test]
fn add_to_cart_event_carries_the_final_price() {
    let product = discounted_cake();
    let groups = CustomizationGroups::for_category(product.category, product.currency());
    let selection = customized(&groups);

    let insertion = CartInsertion::from_selection(&product, &groups, &selection).unwrap();
    assert_eq!(insertion.unit_price, brl(128));
    assert_eq!(insertion.final_price, brl(256));
    assert_eq!(insertion.options.len(), 5);

    let mut cart = Cart::new(Currency::BRL);
    cart.add(insertion.clone()).unwrap();
    assert_eq!(cart.subtotal().unwrap(), brl(256));

    let event = ProductEvent::AddToCart(insertion);
    let json = serde_json::to_string(&event).unwrap();
    let back: ProductEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
