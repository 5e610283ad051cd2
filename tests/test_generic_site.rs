use recipe_extractors::{extract_html, Amount, RecipeRecord};

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#
    )
}

fn extract(html: &str) -> RecipeRecord {
    extract_html("generic", html, "generic.html").unwrap()
}

#[test]
fn test_lowercase_recipe_type() {
    // @type is "recipe" instead of "Recipe"
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "recipe",
        "name": "Easy Black Bean Soup",
        "image": "https://example.com/blackbean.jpg",
        "description": "This black bean soup recipe is easy to make and full of flavor.",
        "keywords": ["black bean soup", "vegetarian", "easy"],
        "prepTime": "PT10M",
        "cookTime": "PT30M",
        "totalTime": "PT40M",
        "recipeCategory": "Soup",
        "recipeIngredient": [
            "2 cans black beans",
            "1 onion, diced",
            "2 cloves garlic, minced",
            "Salt and pepper to taste"
        ],
        "recipeInstructions": [
            "Sauté onion and garlic until soft.",
            "Add beans and broth, simmer for 20 minutes."
        ]
    }
    "#;
    let record = extract(&create_recipe_html(json_ld));

    assert_eq!(record.dish_name.as_deref(), Some("Easy Black Bean Soup"));
    assert_eq!(
        record.description.as_deref(),
        Some("This black bean soup recipe is easy to make and full of flavor.")
    );
    assert_eq!(record.category.as_deref(), Some("Soup"));
    assert_eq!(record.prep_time.as_deref(), Some("10 minutes"));
    assert_eq!(record.cook_time.as_deref(), Some("30 minutes"));
    assert_eq!(record.total_time.as_deref(), Some("40 minutes"));
    assert_eq!(record.tags.as_deref(), Some("black bean soup, vegetarian, easy"));
    assert_eq!(
        record.image_urls.as_deref(),
        Some("https://example.com/blackbean.jpg")
    );
    assert_eq!(
        record.instructions.as_deref(),
        Some("Sauté onion and garlic until soft. Add beans and broth, simmer for 20 minutes.")
    );

    let ingredients = record.ingredients.unwrap();
    assert_eq!(ingredients.len(), 4);
    assert_eq!(ingredients[0].name, "black beans");
    assert_eq!(ingredients[0].unit.as_deref(), Some("cans"));
    assert_eq!(ingredients[1].name, "onion, diced");
    assert_eq!(ingredients[1].amount, Some(Amount::Number(1.0)));
    assert_eq!(ingredients[1].unit, None);
    assert_eq!(ingredients[2].name, "garlic, minced");
    assert_eq!(ingredients[2].unit.as_deref(), Some("cloves"));
    assert_eq!(ingredients[3].name, "Salt and pepper");
    assert_eq!(ingredients[3].amount, None);
}

#[test]
fn test_array_recipe_type() {
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": ["Recipe", "NewsArticle"],
        "name": "Classic Pancakes",
        "recipeIngredient": ["2 cups flour", "1 1/2 cups milk"],
        "recipeInstructions": [{"@type": "HowToStep", "text": "Whisk and fry."}]
    }
    "#;
    let record = extract(&create_recipe_html(json_ld));

    assert_eq!(record.dish_name.as_deref(), Some("Classic Pancakes"));
    let ingredients = record.ingredients.unwrap();
    assert_eq!(ingredients[1].amount, Some(Amount::Number(1.5)));
    assert_eq!(ingredients[1].unit.as_deref(), Some("cups"));
    assert_eq!(record.instructions.as_deref(), Some("Whisk and fry."));
}

#[test]
fn test_non_recipe_type_falls_back_to_page() {
    let json_ld = r#"{"@context": "https://schema.org", "@type": "Article", "name": "Not a recipe"}"#;
    let record = extract(&create_recipe_html(json_ld));

    // og:title is absent, so the heading wins
    assert_eq!(record.dish_name.as_deref(), Some("Recipe"));
    assert_eq!(record.ingredients, None);
}

#[test]
fn test_microdata_recipe() {
    let html = r#"
    <html>
    <body>
    <div class="easyrecipe" itemscope itemtype="http://schema.org/Recipe">
        <div itemprop="name">Mom's Famous Banana Bread</div>
        <div itemprop="description">Mom was kind enough to share her famous banana bread recipe with us!</div>
        <img itemprop="image" src="https://example.com/banana-bread.jpg" />
        <div itemprop="author" itemscope itemtype="http://schema.org/Person">
            <span itemprop="name">Cooking Divine</span>
        </div>
        <div itemprop="nutrition" itemscope itemtype="http://schema.org/NutritionInformation">
            <span itemprop="calories">240 calories</span>
        </div>
        <div itemprop="recipeCategory">Breakfast</div>
        <div itemprop="keywords">banana, bread, sweet</div>
        <time itemprop="prepTime" datetime="PT10M">10 mins</time>
        <time itemprop="cookTime" datetime="PT1H">1 hour</time>
        <time itemprop="totalTime" datetime="PT1H10M">1 hour 10 mins</time>
        <ul>
            <li itemprop="ingredients">5 Tablespoons Butter</li>
            <li itemprop="ingredients">1 Cup White Sugar</li>
            <li itemprop="ingredients">1 Large Egg</li>
        </ul>
        <ol>
            <li itemprop="recipeInstructions">Cream the butter and sugar.</li>
            <li itemprop="recipeInstructions">Beat in the egg.</li>
        </ol>
    </div>
    </body>
    </html>
    "#;
    let record = extract(html);

    assert_eq!(record.dish_name.as_deref(), Some("Mom's Famous Banana Bread"));
    assert_eq!(record.category.as_deref(), Some("Breakfast"));
    assert_eq!(record.nutrition_info.as_deref(), Some("240 calories"));
    assert_eq!(record.tags.as_deref(), Some("banana, bread, sweet"));
    assert_eq!(
        record.image_urls.as_deref(),
        Some("https://example.com/banana-bread.jpg")
    );
    assert_eq!(record.prep_time.as_deref(), Some("10 minutes"));
    assert_eq!(record.cook_time.as_deref(), Some("1 hour"));
    assert_eq!(record.total_time.as_deref(), Some("1 hour 10 minutes"));
    assert_eq!(
        record.instructions.as_deref(),
        Some("Cream the butter and sugar. Beat in the egg.")
    );

    let ingredients = record.ingredients.unwrap();
    assert_eq!(ingredients.len(), 3);
    assert_eq!(ingredients[0].name, "Butter");
    assert_eq!(ingredients[0].amount, Some(Amount::Number(5.0)));
    assert_eq!(ingredients[0].unit.as_deref(), Some("Tablespoons"));
    assert_eq!(ingredients[2].name, "Large Egg");
}
