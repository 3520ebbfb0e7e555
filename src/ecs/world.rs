// src/ecs/world.rs

// Any: コンポーネントの倉庫を型に関係なく保持するための型消去に使うよ。
// TypeId: コンポーネントの種類を区別するキー。
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// ゲーム世界の全エンティティとコンポーネントを管理する中心的な構造体だよ！🌍
///
/// コンポーネントは型ごとに `HashMap<Entity, T>` に入れて、それを `Box<dyn Any>` で
/// 型消去して `component_stores` にまとめてる。ソリティアのカードは最初に 52 枚作ったら
/// 最後まで増えも減りもしないので、エンティティの削除はサポートしてないよ。
pub struct World {
    /// 生存しているエンティティの集合。
    entities: HashSet<Entity>,
    /// TypeId ごとのコンポーネント倉庫 (`HashMap<Entity, T>` が入った Box)。
    component_stores: HashMap<TypeId, Box<dyn Any>>,
}

impl World {
    /// 空っぽの World を作るよ。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            component_stores: HashMap::new(),
        }
    }

    /// ID を指定してエンティティを作るよ。
    ///
    /// カードはソート済みデッキの番号 (0-51) を、ゲーム状態は 52 を ID にする約束なので、
    /// 自動採番はしない。同じ ID を二回指定しても集合なので重複はしないよ。
    pub fn create_entity_with_id(&mut self, entity: Entity) {
        if self.entities.insert(entity) {
            debug!("World: created entity {}", entity.0);
        }
    }

    /// エンティティが生きてるか確認するよ。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 生きてるエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// コンポーネントの型を World に登録するよ。`add_component` の前に必ず呼んでね！
    ///
    /// 同じ型を二回登録すると、中身が空の倉庫で上書きされちゃうので警告を出して無視する。
    pub fn register_component<T: Component>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self.component_stores.contains_key(&type_id) {
            warn!(
                "World: component type {} registered twice, keeping the existing storage",
                std::any::type_name::<T>()
            );
            return;
        }
        let storage: HashMap<Entity, T> = HashMap::new();
        self.component_stores.insert(type_id, Box::new(storage));
    }

    /// エンティティにコンポーネントを付けるよ (同じ型があれば上書き)。
    ///
    /// 生きてないエンティティへの追加は黙って無視する。
    ///
    /// # パニック
    /// 型が `register_component` されてない場合。World の組み立てミスなので即パニックさせる！
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.is_entity_alive(entity) {
            warn!("World: tried to add {} to dead entity {}", std::any::type_name::<T>(), entity.0);
            return;
        }
        match self.storage_mut::<T>() {
            Some(storage) => {
                storage.insert(entity, component);
            }
            None => panic!(
                "World: component type {} not registered! Call register_component::<{}>() first.",
                std::any::type_name::<T>(),
                std::any::type_name::<T>()
            ),
        }
    }

    /// コンポーネントへの読み取り専用参照を取るよ。なければ `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>().and_then(|storage| storage.get(&entity))
    }

    /// コンポーネントへの書き込み可能な参照を取るよ。死んだエンティティには `None`。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.storage_mut::<T>().and_then(|storage| storage.get_mut(&entity))
    }

    /// 指定した型の全コンポーネントを `(Entity, &T)` で舐めるイテレータ。
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
        self.storage::<T>()
            .into_iter()
            .flat_map(|storage| storage.iter())
            .filter(move |(entity, _)| self.is_entity_alive(**entity))
            .map(|(entity, component)| (*entity, component))
    }

    fn storage<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<HashMap<Entity, T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<HashMap<Entity, T>>())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
