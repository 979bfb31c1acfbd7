pub mod analyze_product_image;
