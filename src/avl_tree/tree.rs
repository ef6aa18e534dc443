use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => (**node).height,
    }
}

fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

/*
 *   x                  y
 *  / \                / \
 * T1  y     ===>     x   T3
 *    / \            / \
 *   T2  T3         T1  T2
 */
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

/*
 *     y              x
 *    / \            / \
 *   x   T3  ===>   T1  y
 *  / \                / \
 * T1  T2             T2  T3
 */
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `side` is how the inserted key compared against the child it descended into. Only the
// lowest unbalanced ancestor rotates, so that child is still in place when this runs.
fn balance_after_insert<T>(tree: &mut Tree<T>, side: Option<Ordering>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if side == Some(Ordering::Less) {
            trace!("insert: left-left case, rotating right");
        } else {
            trace!("insert: left-right case, rotating left then right");
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if side == Some(Ordering::Greater) {
            trace!("insert: right-right case, rotating left");
        } else {
            trace!("insert: right-left case, rotating right then left");
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

fn balance_after_remove<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if balance_factor(&node.left) >= 0 {
            trace!("remove: left-left case, rotating right");
        } else {
            trace!("remove: left-right case, rotating left then right");
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if balance_factor(&node.right) <= 0 {
            trace!("remove: right-right case, rotating left");
        } else {
            trace!("remove: right-left case, rotating right then left");
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

fn descent<T>(tree: &Tree<T>, key: &T) -> Option<Ordering>
where
    T: Ord,
{
    tree.as_ref().map(|node| key.cmp(&node.key))
}

// precondition: the tree is not empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => unreachable!(),
    };

    if !has_left {
        return match tree.take() {
            Some(node) => {
                let Node { key, right, .. } = *node;
                *tree = right;
                key
            },
            None => unreachable!(),
        };
    }

    let min = match tree {
        Some(ref mut node) => remove_min(&mut node.left),
        None => unreachable!(),
    };
    balance_after_remove(tree);
    min
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let side = match tree {
        Some(ref mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let side = descent(&node.left, &key);
                if !insert(&mut node.left, key) {
                    return false;
                }
                side
            },
            Ordering::Greater => {
                let side = descent(&node.right, &key);
                if !insert(&mut node.right, key) {
                    return false;
                }
                side
            },
            Ordering::Equal => {
                debug!("ignoring insert of a key that is already present");
                return false;
            },
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    balance_after_insert(tree, side);
    true
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    *tree = right;
                    let Node { key, .. } = *node;
                    Some(key)
                },
                (left, None) => {
                    *tree = left;
                    let Node { key, .. } = *node;
                    Some(key)
                },
                (left, mut right) => {
                    let successor = remove_min(&mut right);
                    node.left = left;
                    node.right = right;
                    let ret = mem::replace(&mut node.key, successor);
                    *tree = Some(node);
                    Some(ret)
                },
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance_after_remove(tree);
    }
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn pre_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        keys.push(&node.key);
        pre_order(&node.left, keys);
        pre_order(&node.right, keys);
    }
}

pub fn in_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        in_order(&node.left, keys);
        keys.push(&node.key);
        in_order(&node.right, keys);
    }
}

pub fn post_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        post_order(&node.left, keys);
        post_order(&node.right, keys);
        keys.push(&node.key);
    }
}

pub fn level_order<'a, T>(tree: &'a Tree<T>, keys: &mut Vec<&'a T>) {
    let mut queue = VecDeque::new();
    if let Some(ref node) = tree {
        queue.push_back(node);
    }
    while let Some(node) = queue.pop_front() {
        keys.push(&node.key);
        if let Some(ref left) = node.left {
            queue.push_back(left);
        }
        if let Some(ref right) = node.right {
            queue.push_back(right);
        }
    }
}
