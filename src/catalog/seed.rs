//! Default catalog written on first start.

use crate::model::{Author, Fact, Painting};
use crate::persistence::CatalogDocument;

/// The catalog used when no document has been stored yet.
pub fn default_catalog() -> CatalogDocument {
    CatalogDocument::new(authors(), paintings(), facts())
}

fn authors() -> Vec<Author> {
    vec![
        Author::new("vango", "Vincent van Gogh")
            .born(1853, "Netherlands")
            .with_portrait("https://upload.wikimedia.org/wikipedia/commons/thumb/3/38/VanGogh_1887_Selbstbildnis.jpg/960px-VanGogh_1887_Selbstbildnis.jpg"),
        Author::new("da-vinci", "Leonardo da Vinci")
            .born(1452, "Italy")
            .with_portrait("http://upload.wikimedia.org/wikipedia/commons/b/ba/Leonardo_self.jpg"),
        Author::new("picasso", "Pablo Picasso")
            .born(1881, "Spain")
            .with_portrait("https://upload.wikimedia.org/wikipedia/commons/9/98/Pablo_picasso_1.jpg"),
        Author::new("dali", "Salvador Dalí")
            .born(1904, "Spain")
            .with_portrait("https://upload.wikimedia.org/wikipedia/commons/thumb/2/24/Salvador_Dal%C3%AD_1939.jpg/960px-Salvador_Dal%C3%AD_1939.jpg"),
        Author::new("monet", "Claude Monet")
            .born(1840, "France")
            .with_portrait("http://upload.wikimedia.org/wikipedia/commons/thumb/3/33/Claude_Monet_1899_Nadar.jpg/500px-Claude_Monet_1899_Nadar.jpg"),
    ]
}

fn paintings() -> Vec<Painting> {
    vec![
        Painting::new("5", "The Weeping Woman", "picasso")
            .painted(1937)
            .with_image("https://upload.wikimedia.org/wikipedia/en/1/14/Picasso_The_Weeping_Woman_Tate_identifier_T05010_10.jpg")
            .popular(true),
        Painting::new("6", "Mona Lisa", "da-vinci")
            .painted(1503)
            .with_image("https://upload.wikimedia.org/wikipedia/commons/thumb/e/ec/Mona_Lisa%2C_by_Leonardo_da_Vinci%2C_from_C2RMF_retouched.jpg/800px-Mona_Lisa%2C_by_Leonardo_da_Vinci%2C_from_C2RMF_retouched.jpg")
            .popular(true),
        Painting::new("1", "The Starry Night", "vango")
            .painted(1889)
            .with_image("https://upload.wikimedia.org/wikipedia/commons/thumb/e/ea/Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg/1280px-Van_Gogh_-_Starry_Night_-_Google_Art_Project.jpg")
            .favorite(true)
            .popular(true),
        Painting::new("2", "Persistence of Memory", "dali")
            .painted(1931)
            .with_image("https://upload.wikimedia.org/wikipedia/en/d/dd/The_Persistence_of_Memory.jpg")
            .popular(true),
        Painting::new("3", "Pierrot", "picasso")
            .painted(1937)
            .with_image("https://upload.wikimedia.org/wikipedia/en/thumb/7/76/Pablo_Picasso%2C_1918%2C_Pierrot%2C_oil_on_canvas%2C_92.7_x_73_cm%2C_Museum_of_Modern_Art.jpg/330px-Pablo_Picasso%2C_1918%2C_Pierrot%2C_oil_on_canvas%2C_92.7_x_73_cm%2C_Museum_of_Modern_Art.jpg")
            .popular(true),
        Painting::new("4", "Water Lilies", "monet")
            .painted(1919)
            .with_image("https://upload.wikimedia.org/wikipedia/commons/thumb/c/cb/Claude_Monet_Nympheas_1915_Musee_Marmottan_Paris.jpg/960px-Claude_Monet_Nympheas_1915_Musee_Marmottan_Paris.jpg")
            .popular(true),
    ]
}

fn facts() -> Vec<Fact> {
    vec![
        Fact::new("1", "Van Gogh painted 'The Starry Night' from the window of his asylum room at Saint-Rémy-de-Provence."),
        Fact::new("2", "Leonardo da Vinci could write with one hand and draw with the other simultaneously."),
        Fact::new("3", "The persistence of memory was inspired by Dalí seeing Camembert cheese melting in the sun."),
    ]
}
