use leptos::prelude::*;

/// Product card metadata
pub struct Product {
    pub name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
}

pub const B2B_PRODUCTS: &[Product] = &[
    Product {
        name: "Bundlr",
        url: "https://bundlr.sinxsolutions.ai",
        logo: "assets/Bundlr.svg",
    },
    Product {
        name: "Sinx Solutions",
        url: "https://www.sinxsolutions.ai",
        logo: "assets/SinX.svg",
    },
];

pub const B2C_PRODUCTS: &[Product] = &[
    Product {
        name: "Knowtice AI",
        url: "https://www.knowtice.ai",
        logo: "assets/Knowtice.svg",
    },
    Product {
        name: "Career Growth AI",
        url: "https://www.mycareergrowth.ai",
        logo: "assets/MCG.svg",
    },
];

#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id="products" class="section products">
            <h2 class="section-title">"Our Products"</h2>
            <h3 class="section-subtitle">"B2B Solutions"</h3>
            <div class="product-grid">{product_cards(B2B_PRODUCTS)}</div>
            <h3 class="section-subtitle">"B2C Solutions"</h3>
            <div class="product-grid">{product_cards(B2C_PRODUCTS)}</div>
        </section>
    }
}

fn product_cards(products: &'static [Product]) -> impl IntoView {
    products
        .iter()
        .map(|product| {
            view! {
                <a
                    href=product.url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="product-card"
                >
                    <img
                        class="product-logo"
                        src=product.logo
                        alt=format!("{} logo", product.name)
                    />
                    <h3 class="product-name">{product.name}</h3>
                    <span class="product-domain">
                        {product.url.trim_start_matches("https://")}
                    </span>
                </a>
            }
        })
        .collect::<Vec<_>>()
}
